//! Web server HTTP handlers.

mod api;
mod form;

pub use api::api_lookup_handler;
pub use form::{index_handler, lookup_form_handler};
