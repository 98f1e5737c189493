mod core_error;
pub mod error_code;

pub use core_error::{CoreError, CoreResult};
pub use error_code::EventgateErrorCode;
