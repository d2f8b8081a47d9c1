use serde::{Deserialize, Serialize};

/// Platform integer for 16-bit signed PCM.
pub const ENCODING_PCM_16BIT: i32 = 2;
/// Platform integer for 8-bit unsigned PCM.
pub const ENCODING_PCM_8BIT: i32 = 3;
/// Platform integer for 32-bit float PCM.
pub const ENCODING_PCM_FLOAT: i32 = 4;
/// Platform integer for AC-3 passthrough.
pub const ENCODING_AC3: i32 = 5;

/// Audio sample encoding requested by a record session.
///
/// Only the PCM encodings are understood by the buffer-size query; every other
/// platform value is carried as `Other` so it can be reported back verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    #[default]
    #[serde(rename = "pcm_16bit")]
    Pcm16Bit,
    #[serde(rename = "pcm_8bit")]
    Pcm8Bit,
    PcmFloat,
    Other(i32),
}

impl Encoding {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            ENCODING_PCM_16BIT => Self::Pcm16Bit,
            ENCODING_PCM_8BIT => Self::Pcm8Bit,
            ENCODING_PCM_FLOAT => Self::PcmFloat,
            other => Self::Other(other),
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::Pcm16Bit => ENCODING_PCM_16BIT,
            Self::Pcm8Bit => ENCODING_PCM_8BIT,
            Self::PcmFloat => ENCODING_PCM_FLOAT,
            Self::Other(raw) => raw,
        }
    }

    /// Bytes per sample, for the encodings that have a fixed sample width.
    pub fn bytes_per_sample(self) -> Option<usize> {
        match self {
            Self::Pcm8Bit => Some(1),
            Self::Pcm16Bit => Some(2),
            Self::PcmFloat => Some(4),
            Self::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_mapping_is_stable() {
        for raw in [ENCODING_PCM_16BIT, ENCODING_PCM_8BIT, ENCODING_PCM_FLOAT, ENCODING_AC3, 99] {
            assert_eq!(Encoding::from_raw(raw).raw(), raw);
        }
        assert_eq!(Encoding::from_raw(ENCODING_AC3), Encoding::Other(5));
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&Encoding::Pcm16Bit).unwrap(), "\"pcm_16bit\"");
        assert_eq!(serde_json::to_string(&Encoding::PcmFloat).unwrap(), "\"pcm_float\"");
        let other: Encoding = serde_json::from_str("{\"other\":5}").unwrap();
        assert_eq!(other, Encoding::Other(ENCODING_AC3));
    }
}
