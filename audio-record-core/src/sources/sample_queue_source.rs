use std::ops::Range;

use parking_lot::Mutex;

use crate::buffer::direct_buffer::DirectBuffer;
use crate::models::error::RecordError;
use crate::models::status;
use crate::processing::sample_convert::{self, decode_pcm16_le, encode_pcm16_le};
use crate::processing::sample_queue::SampleQueue;
use crate::processing::wav_format::{self, WavSpec};
use crate::traits::record_source::AudioRecordSource;

/// Source that serves samples a test pushed into it, in order.
///
/// Samples are queued as interleaved `f32` and converted to the read shape on
/// the way out: 16-bit little-endian PCM for byte and direct reads, `i16` for
/// short reads. Reads never block; an empty queue yields 0 whatever
/// `is_blocking` says.
///
/// Array reads whose `offset`/`size` fall outside the slice return
/// [`status::ERROR_BAD_VALUE`].
#[derive(Debug)]
pub struct SampleQueueSource {
    queue: Mutex<SampleQueue>,
    wav_spec: Option<WavSpec>,
}

impl SampleQueueSource {
    /// Ten seconds of 48 kHz stereo.
    pub const DEFAULT_CAPACITY: usize = 48_000 * 2 * 10;

    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(SampleQueue::new(capacity)),
            wav_spec: None,
        }
    }

    /// Source preloaded with `samples`, sized to hold at least all of them.
    pub fn with_samples(samples: &[f32]) -> Self {
        let source = Self::new(samples.len().max(Self::DEFAULT_CAPACITY));
        source.push(samples);
        source
    }

    /// Source preloaded with the payload of a 16-bit PCM WAV image.
    pub fn from_wav(image: &[u8]) -> Result<Self, RecordError> {
        let (spec, data) = wav_format::parse_pcm16_wav(image)?;
        log::debug!(
            "Loaded wav fixture: {} Hz, {} channel(s), {} bytes",
            spec.sample_rate,
            spec.channels,
            data.len()
        );
        let mut source = Self::with_samples(&decode_pcm16_le(data));
        source.wav_spec = Some(spec);
        Ok(source)
    }

    /// Format of the WAV image this source was loaded from, if any.
    pub fn wav_spec(&self) -> Option<WavSpec> {
        self.wav_spec
    }

    /// Queue more samples. Returns how many older samples were dropped.
    pub fn push(&self, samples: &[f32]) -> usize {
        let dropped = self.queue.lock().push(samples);
        if dropped > 0 {
            log::warn!("Sample queue full, dropped {} samples", dropped);
        }
        dropped
    }

    pub fn push_pcm16(&self, samples: &[i16]) -> usize {
        let floats: Vec<f32> = samples.iter().map(|&s| sample_convert::i16_to_f32(s)).collect();
        self.push(&floats)
    }

    /// Samples still queued.
    pub fn available(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn clear(&self) {
        self.queue.lock().clear();
    }

    fn take(&self, count: usize) -> Vec<f32> {
        self.queue.lock().pop(count)
    }
}

impl Default for SampleQueueSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl AudioRecordSource for SampleQueueSource {
    fn read_in_byte_array(
        &self,
        audio_data: &mut [u8],
        offset_in_bytes: i32,
        size_in_bytes: i32,
        _is_blocking: bool,
    ) -> i32 {
        let Some(range) = window(audio_data.len(), offset_in_bytes, size_in_bytes) else {
            return status::ERROR_BAD_VALUE;
        };
        let bytes = encode_pcm16_le(&self.take(range.len() / 2));
        audio_data[range.start..range.start + bytes.len()].copy_from_slice(&bytes);
        bytes.len() as i32
    }

    fn read_in_short_array(
        &self,
        audio_data: &mut [i16],
        offset_in_shorts: i32,
        size_in_shorts: i32,
        _is_blocking: bool,
    ) -> i32 {
        let Some(range) = window(audio_data.len(), offset_in_shorts, size_in_shorts) else {
            return status::ERROR_BAD_VALUE;
        };
        let samples = self.take(range.len());
        for (slot, &sample) in audio_data[range].iter_mut().zip(&samples) {
            *slot = sample_convert::f32_to_i16(sample);
        }
        samples.len() as i32
    }

    fn read_in_float_array(
        &self,
        audio_data: &mut [f32],
        offset_in_floats: i32,
        size_in_floats: i32,
        _is_blocking: bool,
    ) -> i32 {
        let Some(range) = window(audio_data.len(), offset_in_floats, size_in_floats) else {
            return status::ERROR_BAD_VALUE;
        };
        self.queue.lock().drain_into(&mut audio_data[range]) as i32
    }

    fn read_in_direct_buffer(
        &self,
        buffer: &mut DirectBuffer,
        size_in_bytes: i32,
        _is_blocking: bool,
    ) -> i32 {
        if size_in_bytes < 0 {
            return status::ERROR_BAD_VALUE;
        }
        let budget = buffer.remaining().min(size_in_bytes as usize);
        let bytes = encode_pcm16_le(&self.take(budget / 2));
        match buffer.put(&bytes) {
            Ok(()) => bytes.len() as i32,
            Err(_) => status::ERROR_INVALID_OPERATION,
        }
    }
}

/// `offset..offset + size` if it lies inside a slice of `len`.
fn window(len: usize, offset: i32, size: i32) -> Option<Range<usize>> {
    let offset = usize::try_from(offset).ok()?;
    let size = usize::try_from(size).ok()?;
    let end = offset.checked_add(size)?;
    (end <= len).then_some(offset..end)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn float_reads_drain_in_order() {
        let source = SampleQueueSource::with_samples(&[0.1, 0.2, 0.3]);

        let mut out = [0.0f32; 4];
        assert_eq!(source.read_in_float_array(&mut out, 1, 2, true), 2);
        assert_eq!(out, [0.0, 0.1, 0.2, 0.0]);
        assert_eq!(source.read_in_float_array(&mut out, 0, 4, true), 1);
        assert_relative_eq!(out[0], 0.3);
        assert_eq!(source.read_in_float_array(&mut out, 0, 4, false), 0);
    }

    #[test]
    fn short_reads_convert() {
        let source = SampleQueueSource::with_samples(&[1.0, -1.0, 0.0]);

        let mut out = [9i16; 3];
        assert_eq!(source.read_in_short_array(&mut out, 0, 3, true), 3);
        assert_eq!(out, [i16::MAX, -i16::MAX, 0]);
    }

    #[test]
    fn byte_reads_write_whole_samples_only() {
        let source = SampleQueueSource::with_samples(&[1.0, 1.0]);

        let mut out = [0u8; 6];
        // Three bytes requested: only one whole sample fits.
        assert_eq!(source.read_in_byte_array(&mut out, 1, 3, true), 2);
        assert_eq!(out[1..3], i16::MAX.to_le_bytes());
        assert_eq!(out[3], 0);
        assert_eq!(source.available(), 1);
    }

    #[test]
    fn out_of_range_arguments_are_bad_values() {
        let source = SampleQueueSource::with_samples(&[0.5; 8]);
        let mut out = [0.0f32; 4];

        assert_eq!(source.read_in_float_array(&mut out, 2, 3, true), status::ERROR_BAD_VALUE);
        assert_eq!(source.read_in_float_array(&mut out, -1, 1, true), status::ERROR_BAD_VALUE);
        assert_eq!(source.read_in_short_array(&mut [0; 2], 0, -1, true), status::ERROR_BAD_VALUE);
        assert_eq!(source.available(), 8);
    }

    #[test]
    fn direct_reads_fill_duplicate_up_to_remaining() {
        let source = SampleQueueSource::with_samples(&[0.5; 10]);
        let mut buf = DirectBuffer::allocate(6);

        assert_eq!(source.read_in_direct_buffer(&mut buf, 50, true), 6);
        assert_eq!(buf.position(), 6);
        assert_eq!(source.available(), 7);

        let first = i16::from_le_bytes([buf.get_at(0).unwrap(), buf.get_at(1).unwrap()]);
        assert_eq!(first, sample_convert::f32_to_i16(0.5));
    }

    #[test]
    fn push_pcm16_round_trips_through_shorts() {
        let source = SampleQueueSource::default();
        source.push_pcm16(&[16384, -16384]);

        let mut out = [0.0f32; 2];
        assert_eq!(source.read_in_float_array(&mut out, 0, 2, true), 2);
        assert_relative_eq!(out[0], 0.5);
        assert_relative_eq!(out[1], -0.5);
    }

    #[test]
    fn overflow_drops_oldest() {
        let source = SampleQueueSource::new(2);
        assert_eq!(source.push(&[0.1, 0.2, 0.3]), 1);

        let mut out = [0.0f32; 2];
        source.read_in_float_array(&mut out, 0, 2, true);
        assert_eq!(out, [0.2, 0.3]);
    }

    #[test]
    fn loads_wav_fixture() {
        let pcm = [0x00, 0x40, 0x00, 0xC0];
        let image = wav_format::build_pcm16_wav(16000, 1, &pcm);
        let source = SampleQueueSource::from_wav(&image).unwrap();

        assert_eq!(source.wav_spec().map(|s| s.sample_rate), Some(16000));
        assert_eq!(source.available(), 2);

        let mut bytes = [0u8; 4];
        assert_eq!(source.read_in_byte_array(&mut bytes, 0, 4, true), 4);
        // 0.5 re-encodes at the 32767 scale.
        assert_eq!(i16::from_le_bytes([bytes[0], bytes[1]]), 16383);
    }

    #[test]
    fn rejects_bad_wav() {
        assert!(matches!(
            SampleQueueSource::from_wav(b"RIFF"),
            Err(RecordError::InvalidWav(_))
        ));
    }

    #[test]
    fn clear_discards_queue() {
        let source = SampleQueueSource::with_samples(&[0.1; 4]);
        source.clear();
        assert_eq!(source.read_in_float_array(&mut [0.0; 4], 0, 4, true), 0);
    }
}
