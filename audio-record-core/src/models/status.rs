//! Return codes of the simulated native record surface.
//!
//! Non-negative values are counts; negative values are errors. Sources may
//! return any negative value, these are only the ones the layer itself uses.

use super::error::RecordError;

pub const SUCCESS: i32 = 0;
pub const ERROR: i32 = -1;
pub const ERROR_BAD_VALUE: i32 = -2;
pub const ERROR_INVALID_OPERATION: i32 = -3;
pub const ERROR_DEAD_OBJECT: i32 = -6;

/// Whether `code` signals a failure.
pub fn is_error(code: i32) -> bool {
    code < 0
}

/// Convert a raw read return into a count, or the error it encodes.
pub fn check(code: i32) -> Result<usize, RecordError> {
    match code {
        c if c >= 0 => Ok(c as usize),
        ERROR_BAD_VALUE => Err(RecordError::BadValue("native call rejected its arguments".into())),
        ERROR_INVALID_OPERATION => {
            Err(RecordError::InvalidOperation("native call not valid in this state".into()))
        }
        c => Err(RecordError::Source(c)),
    }
}
