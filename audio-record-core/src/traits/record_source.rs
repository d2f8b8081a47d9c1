use std::sync::Arc;

use crate::buffer::direct_buffer::DirectBuffer;
use crate::models::status;

/// Produces the source a record session reads from.
///
/// Invoked once per session for each installation in the
/// [`SourceRegistry`](crate::registry::source_registry::SourceRegistry).
pub type SourceFactory = Arc<dyn Fn() -> Arc<dyn AudioRecordSource> + Send + Sync + 'static>;

/// Supplies the data behind the simulated record reads.
///
/// Every method has a default that reports the request as fully satisfied
/// without writing any samples, so implementations override only the read
/// shapes their scenario cares about.
///
/// Each method returns either a non-negative count written from `offset` or a
/// negative error code. Codes are handed to the caller unchanged.
///
/// A source installed with `set_global_source` is shared by every session and
/// may be called from several threads at once.
pub trait AudioRecordSource: Send + Sync {
    /// Backs byte reads. Sizes and the returned count are in bytes.
    fn read_in_byte_array(
        &self,
        _audio_data: &mut [u8],
        _offset_in_bytes: i32,
        size_in_bytes: i32,
        _is_blocking: bool,
    ) -> i32 {
        size_in_bytes
    }

    /// Backs `i16` reads. Sizes and the returned count are in samples.
    fn read_in_short_array(
        &self,
        _audio_data: &mut [i16],
        _offset_in_shorts: i32,
        size_in_shorts: i32,
        _is_blocking: bool,
    ) -> i32 {
        size_in_shorts
    }

    /// Backs `f32` reads. Sizes and the returned count are in samples.
    fn read_in_float_array(
        &self,
        _audio_data: &mut [f32],
        _offset_in_floats: i32,
        size_in_floats: i32,
        _is_blocking: bool,
    ) -> i32 {
        size_in_floats
    }

    /// Backs direct buffer reads.
    ///
    /// `buffer` is a duplicate of the caller's view: position and limit
    /// changes made here are not visible to the caller, writes to the
    /// contents are. The default consumes `min(remaining, size_in_bytes)`.
    fn read_in_direct_buffer(
        &self,
        buffer: &mut DirectBuffer,
        size_in_bytes: i32,
        _is_blocking: bool,
    ) -> i32 {
        let max_bytes = buffer.remaining().min(size_in_bytes.max(0) as usize);
        match buffer.advance(max_bytes) {
            Ok(()) => max_bytes as i32,
            Err(_) => status::ERROR_INVALID_OPERATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Untouched;

    impl AudioRecordSource for Untouched {}

    struct ShortsOnly;

    impl AudioRecordSource for ShortsOnly {
        fn read_in_short_array(
            &self,
            audio_data: &mut [i16],
            offset_in_shorts: i32,
            size_in_shorts: i32,
            _is_blocking: bool,
        ) -> i32 {
            let start = offset_in_shorts as usize;
            let end = start + size_in_shorts as usize;
            audio_data[start..end].fill(7);
            size_in_shorts
        }
    }

    #[test]
    fn defaults_report_full_size_without_writing() {
        let source = Untouched;

        let mut bytes = [1u8; 8];
        assert_eq!(source.read_in_byte_array(&mut bytes, 2, 6, true), 6);
        assert_eq!(bytes, [1u8; 8]);

        let mut shorts = [3i16; 4];
        assert_eq!(source.read_in_short_array(&mut shorts, 0, 4, false), 4);
        assert_eq!(shorts, [3i16; 4]);

        let mut floats = [0.5f32; 4];
        assert_eq!(source.read_in_float_array(&mut floats, 1, 3, true), 3);
        assert_eq!(floats, [0.5f32; 4]);
    }

    #[test]
    fn default_direct_read_is_capped_by_remaining() {
        let source = Untouched;

        let mut buf = DirectBuffer::allocate(100);
        assert_eq!(source.read_in_direct_buffer(&mut buf, 50, true), 50);
        assert_eq!(buf.position(), 50);

        let mut short = DirectBuffer::allocate(30);
        assert_eq!(source.read_in_direct_buffer(&mut short, 50, true), 30);
        assert_eq!(short.position(), 30);
    }

    #[test]
    fn default_direct_read_treats_negative_size_as_empty() {
        let mut buf = DirectBuffer::allocate(10);
        assert_eq!(Untouched.read_in_direct_buffer(&mut buf, -5, false), 0);
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn overriding_one_shape_keeps_other_defaults() {
        let source = ShortsOnly;

        let mut shorts = [0i16; 4];
        assert_eq!(source.read_in_short_array(&mut shorts, 1, 2, true), 2);
        assert_eq!(shorts, [0, 7, 7, 0]);

        let mut bytes = [0u8; 4];
        assert_eq!(source.read_in_byte_array(&mut bytes, 0, 4, true), 4);
        assert_eq!(bytes, [0u8; 4]);
    }
}
