pub mod sample_convert;
pub mod sample_queue;
pub mod wav_format;
