//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`InitializationError`, `ErrorKind`, `ErrorDescriptor`)
//! - Transport error categorization for logging
//!
//! Every lookup failure is terminal for its request; nothing here retries.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, error_chain_message};
pub use types::{ErrorDescriptor, ErrorKind, InitializationError};
