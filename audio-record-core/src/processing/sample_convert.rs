//! Conversions between float samples and 16-bit PCM.

/// Convert one `[-1.0, 1.0]` sample to `i16`, clamping out-of-range values.
pub fn f32_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

/// Convert one `i16` sample to `[-1.0, 1.0)`.
pub fn i16_to_f32(sample: i16) -> f32 {
    sample as f32 / 32768.0
}

/// Encode float samples as little-endian 16-bit PCM. Output is `2 * samples.len()` bytes.
pub fn encode_pcm16_le(samples: &[f32]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        data.extend_from_slice(&f32_to_i16(sample).to_le_bytes());
    }
    data
}

/// Decode little-endian 16-bit PCM. A trailing odd byte is ignored.
pub fn decode_pcm16_le(data: &[u8]) -> Vec<f32> {
    data.chunks_exact(2)
        .map(|pair| i16_to_f32(i16::from_le_bytes([pair[0], pair[1]])))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn full_scale_and_clamping() {
        assert_eq!(f32_to_i16(1.0), i16::MAX);
        assert_eq!(f32_to_i16(-1.0), -i16::MAX);
        assert_eq!(f32_to_i16(3.5), i16::MAX);
        assert_eq!(f32_to_i16(-2.0), -i16::MAX);
        assert_eq!(f32_to_i16(0.0), 0);
    }

    #[test]
    fn i16_to_f32_range() {
        assert_relative_eq!(i16_to_f32(i16::MIN), -1.0);
        assert_relative_eq!(i16_to_f32(16384), 0.5);
        assert_relative_eq!(i16_to_f32(0), 0.0);
    }

    #[test]
    fn encode_is_little_endian() {
        let bytes = encode_pcm16_le(&[1.0, 0.0]);
        assert_eq!(bytes.len(), 4);
        assert_eq!(bytes[0..2], i16::MAX.to_le_bytes());
        assert_eq!(bytes[2..4], [0, 0]);
    }

    #[test]
    fn decode_ignores_trailing_byte() {
        let samples = decode_pcm16_le(&[0x00, 0x40, 0x00, 0xC0, 0xFF]);
        assert_eq!(samples.len(), 2);
        assert_relative_eq!(samples[0], 0.5);
        assert_relative_eq!(samples[1], -0.5);
    }
}
