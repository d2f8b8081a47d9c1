use serde::{Deserialize, Serialize};

use super::encoding::Encoding;

/// Configuration for a simulated record session.
///
/// Mirrors the arguments a caller hands to the platform record constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordConfiguration {
    /// Sample rate in Hz (default: 44100).
    pub sample_rate_hz: i32,

    /// Number of input channels (default: 1).
    pub channel_count: i32,

    /// Sample encoding (default: 16-bit PCM).
    pub encoding: Encoding,

    /// Requested buffer size, or None to use the minimum buffer size.
    pub buffer_size_in_bytes: Option<i32>,
}

impl RecordConfiguration {
    pub const MIN_SAMPLE_RATE_HZ: i32 = 4000;
    pub const MAX_SAMPLE_RATE_HZ: i32 = 192_000;
    pub const MAX_CHANNEL_COUNT: i32 = 8;

    pub fn validate(&self) -> Result<(), String> {
        if !(Self::MIN_SAMPLE_RATE_HZ..=Self::MAX_SAMPLE_RATE_HZ).contains(&self.sample_rate_hz) {
            return Err(format!("unsupported sample rate: {}", self.sample_rate_hz));
        }
        if !(1..=Self::MAX_CHANNEL_COUNT).contains(&self.channel_count) {
            return Err(format!("unsupported channel count: {}", self.channel_count));
        }
        if let Some(size) = self.buffer_size_in_bytes {
            if size <= 0 {
                return Err(format!("buffer size must be positive: {}", size));
            }
        }
        Ok(())
    }

    /// Size of one frame in bytes, if the encoding has a fixed sample width.
    pub fn frame_size_in_bytes(&self) -> Option<i32> {
        self.encoding
            .bytes_per_sample()
            .map(|bytes| bytes as i32 * self.channel_count)
    }
}

impl Default for RecordConfiguration {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44100,
            channel_count: 1,
            encoding: Encoding::Pcm16Bit,
            buffer_size_in_bytes: None,
        }
    }
}
