//! Utilities for sanitizing error messages and raw response snippets.
//!
//! Removes control characters from text before it is logged or rendered,
//! and bounds the size of anything copied out of an upstream response.

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can cause
/// issues when displayed in logs or HTML. This function removes them while
/// preserving readability.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            // Allow printable ASCII, newline, tab, carriage return
            // Remove other control characters (0x00-0x1F except \n, \t, \r)
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
                || code > 0x7F // Allow non-ASCII (UTF-8)
        })
        .collect()
}

/// Sanitizes and truncates an error message to `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Appends a truncation indicator with the original length when the message
/// was cut.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let length = sanitized.chars().count();

    if length > crate::config::MAX_ERROR_MESSAGE_LENGTH {
        // Leave room for the truncation note
        let keep = crate::config::MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        let head: String = sanitized.chars().take(keep).collect();
        format!("{}... (truncated, original length: {} chars)", head, length)
    } else {
        sanitized
    }
}

/// Returns the first `max_chars` characters of `body`, with control characters removed.
///
/// Counts characters rather than bytes so a multi-byte sequence is never split.
pub fn truncate_snippet(body: &str, max_chars: usize) -> String {
    sanitize_error_message(body).chars().take(max_chars).collect()
}
