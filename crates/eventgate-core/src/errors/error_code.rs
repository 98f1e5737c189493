//! Stable machine-readable codes for errors crossing the library boundary.

/// Every eventgate error maps to a fixed code string that callers can match
/// on without parsing the display message.
pub trait EventgateErrorCode {
    fn error_code(&self) -> &'static str;
}
