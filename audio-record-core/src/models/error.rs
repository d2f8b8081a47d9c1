use thiserror::Error;

use super::status;

/// Cursor misuse on a [`DirectBuffer`](crate::buffer::DirectBuffer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("position {position} exceeds limit {limit}")]
    PositionOutOfRange { position: usize, limit: usize },

    #[error("limit {limit} exceeds capacity {capacity}")]
    LimitOutOfRange { limit: usize, capacity: usize },

    #[error("mark is not set")]
    InvalidMark,

    #[error("buffer overflow: {requested} bytes requested, {remaining} remaining")]
    Overflow { requested: usize, remaining: usize },

    #[error("buffer underflow: {requested} bytes requested, {remaining} remaining")]
    Underflow { requested: usize, remaining: usize },
}

/// Errors raised by the record layer outside the raw native surface.
///
/// The native read/start entry points return plain `i32` codes; this type is
/// what configuration, WAV loading and [`status::check`] hand back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("bad value: {0}")]
    BadValue(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("direct buffer: {0}")]
    Buffer(#[from] BufferError),

    #[error("invalid wav data: {0}")]
    InvalidWav(String),

    #[error("source reported error code {0}")]
    Source(i32),
}

impl RecordError {
    /// Platform status code equivalent of this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::BadValue(_) | Self::InvalidWav(_) => status::ERROR_BAD_VALUE,
            Self::InvalidOperation(_) | Self::Buffer(_) => status::ERROR_INVALID_OPERATION,
            Self::Source(code) => *code,
        }
    }
}
