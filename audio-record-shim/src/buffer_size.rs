use audio_record_core::models::encoding::Encoding;
use audio_record_core::models::status;

/// Minimum record buffer size in bytes, or [`status::ERROR_BAD_VALUE`].
///
/// Roughly a quarter second of audio: `frame_size * (sample_rate_hz / 4)`,
/// with the quarter truncated. 16-bit PCM uses a 2-byte frame whatever the
/// channel count; float PCM uses `2 * channel_count`. Every other encoding is
/// rejected. Pure: nothing is read from or written to any session state.
pub fn min_buffer_size(sample_rate_hz: i32, channel_count: i32, encoding: Encoding) -> i32 {
    let frame_size = match encoding {
        Encoding::Pcm16Bit => 2,
        Encoding::PcmFloat => 2i32.wrapping_mul(channel_count),
        _ => return status::ERROR_BAD_VALUE,
    };
    frame_size.wrapping_mul(sample_rate_hz / 4)
}

/// [`min_buffer_size`] for a raw platform encoding value.
pub fn min_buffer_size_raw(sample_rate_hz: i32, channel_count: i32, raw_encoding: i32) -> i32 {
    min_buffer_size(sample_rate_hz, channel_count, Encoding::from_raw(raw_encoding))
}

#[cfg(test)]
mod tests {
    use audio_record_core::models::encoding::{ENCODING_AC3, ENCODING_PCM_FLOAT};

    use super::*;

    #[test]
    fn pcm16_cd_quality() {
        assert_eq!(min_buffer_size(44100, 2, Encoding::Pcm16Bit), 22050);
    }

    #[test]
    fn pcm16_ignores_channel_count() {
        for channels in 1..=8 {
            assert_eq!(min_buffer_size(48000, channels, Encoding::Pcm16Bit), 2 * 12000);
        }
    }

    #[test]
    fn pcm16_truncates_quarter() {
        // 22050 / 4 = 5512.5
        assert_eq!(min_buffer_size(22050, 1, Encoding::Pcm16Bit), 2 * 5512);
        assert_eq!(min_buffer_size(3, 1, Encoding::Pcm16Bit), 0);
    }

    #[test]
    fn float_scales_with_channels() {
        assert_eq!(min_buffer_size(16000, 1, Encoding::PcmFloat), 8000);
        assert_eq!(min_buffer_size(16000, 2, Encoding::PcmFloat), 16000);
        assert_eq!(min_buffer_size(44100, 2, Encoding::PcmFloat), 2 * 2 * 11025);
    }

    #[test]
    fn unsupported_encodings_are_bad_values() {
        for (rate, channels) in [(8000, 1), (44100, 2), (0, 0), (-1, 6)] {
            assert_eq!(
                min_buffer_size(rate, channels, Encoding::Other(ENCODING_AC3)),
                status::ERROR_BAD_VALUE
            );
            assert_eq!(
                min_buffer_size(rate, channels, Encoding::Pcm8Bit),
                status::ERROR_BAD_VALUE
            );
        }
    }

    #[test]
    fn deterministic() {
        let first = min_buffer_size(32000, 3, Encoding::PcmFloat);
        for _ in 0..10 {
            assert_eq!(min_buffer_size(32000, 3, Encoding::PcmFloat), first);
        }
    }

    #[test]
    fn raw_encoding_values() {
        assert_eq!(min_buffer_size_raw(16000, 1, ENCODING_PCM_FLOAT), 8000);
        assert_eq!(min_buffer_size_raw(8000, 1, ENCODING_AC3), -2);
    }
}
