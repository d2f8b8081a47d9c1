use crate::buffer::direct_buffer::DirectBuffer;
use crate::traits::record_source::AudioRecordSource;

/// Source that answers every read with the same error code.
///
/// Useful for driving a consumer's error path, e.g. with
/// [`status::ERROR_DEAD_OBJECT`](crate::models::status::ERROR_DEAD_OBJECT).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailingSource {
    code: i32,
}

impl FailingSource {
    pub fn new(code: i32) -> Self {
        Self { code }
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl AudioRecordSource for FailingSource {
    fn read_in_byte_array(&self, _: &mut [u8], _: i32, _: i32, _: bool) -> i32 {
        self.code
    }

    fn read_in_short_array(&self, _: &mut [i16], _: i32, _: i32, _: bool) -> i32 {
        self.code
    }

    fn read_in_float_array(&self, _: &mut [f32], _: i32, _: i32, _: bool) -> i32 {
        self.code
    }

    fn read_in_direct_buffer(&self, _: &mut DirectBuffer, _: i32, _: bool) -> i32 {
        self.code
    }
}
