//! WAV image helpers for building and loading PCM fixtures.
//!
//! Only uncompressed 16-bit PCM is understood. Unknown chunks between `fmt `
//! and `data` are skipped.

use crate::models::error::RecordError;

/// Size of the canonical WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

const PCM_FORMAT_CODE: u16 = 1;

/// Format fields of a parsed WAV image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

/// Generate a 44-byte PCM WAV header.
///
/// Layout:
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    36 + data_size
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16
/// [20-21]  1 (PCM)
/// [22-23]  channels
/// [24-27]  sample_rate
/// [28-31]  sample_rate * channels * bit_depth / 8
/// [32-33]  channels * bit_depth / 8
/// [34-35]  bit_depth
/// [36-39]  "data"
/// [40-43]  data_size
/// ```
pub fn generate_wav_header(sample_rate: u32, bit_depth: u16, channels: u16, data_size: u32) -> [u8; WAV_HEADER_SIZE] {
    let byte_rate = sample_rate * channels as u32 * bit_depth as u32 / 8;
    let block_align = channels * bit_depth / 8;

    let mut header = [0u8; WAV_HEADER_SIZE];
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&(36 + data_size).to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&PCM_FORMAT_CODE.to_le_bytes());
    header[22..24].copy_from_slice(&channels.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&bit_depth.to_le_bytes());
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());
    header
}

/// Build a complete 16-bit PCM WAV image from little-endian sample bytes.
pub fn build_pcm16_wav(sample_rate: u32, channels: u16, pcm: &[u8]) -> Vec<u8> {
    let mut image = Vec::with_capacity(WAV_HEADER_SIZE + pcm.len());
    image.extend_from_slice(&generate_wav_header(sample_rate, 16, channels, pcm.len() as u32));
    image.extend_from_slice(pcm);
    image
}

/// Parse a 16-bit PCM WAV image, returning its format and the `data` payload.
///
/// A `data` chunk that claims more bytes than the image holds is truncated to
/// what is present.
pub fn parse_pcm16_wav(image: &[u8]) -> Result<(WavSpec, &[u8]), RecordError> {
    if image.len() < 12 || &image[0..4] != b"RIFF" || &image[8..12] != b"WAVE" {
        return Err(RecordError::InvalidWav("missing RIFF/WAVE header".into()));
    }

    let mut spec = None;
    let mut cursor = 12;
    while cursor + 8 <= image.len() {
        let id = &image[cursor..cursor + 4];
        let size = read_u32(image, cursor + 4) as usize;
        let body_start = cursor + 8;
        let body_end = body_start.saturating_add(size).min(image.len());
        let body = &image[body_start..body_end];

        match id {
            b"fmt " => spec = Some(parse_fmt_chunk(body)?),
            b"data" => {
                let spec = spec.ok_or_else(|| RecordError::InvalidWav("data chunk before fmt chunk".into()))?;
                return Ok((spec, body));
            }
            _ => {}
        }

        // Chunks are padded to an even length.
        cursor = body_start.saturating_add(size).saturating_add(size & 1);
    }

    Err(RecordError::InvalidWav("no data chunk".into()))
}

fn parse_fmt_chunk(body: &[u8]) -> Result<WavSpec, RecordError> {
    if body.len() < 16 {
        return Err(RecordError::InvalidWav(format!("fmt chunk too short: {} bytes", body.len())));
    }
    let format = read_u16(body, 0);
    if format != PCM_FORMAT_CODE {
        return Err(RecordError::InvalidWav(format!("unsupported format code: {}", format)));
    }
    let spec = WavSpec {
        channels: read_u16(body, 2),
        sample_rate: read_u32(body, 4),
        bits_per_sample: read_u16(body, 14),
    };
    if spec.bits_per_sample != 16 {
        return Err(RecordError::InvalidWav(format!(
            "unsupported bit depth: {}",
            spec.bits_per_sample
        )));
    }
    if spec.channels == 0 {
        return Err(RecordError::InvalidWav("zero channels".into()));
    }
    Ok(spec)
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}
