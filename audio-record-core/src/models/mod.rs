pub mod config;
pub mod encoding;
pub mod error;
pub mod status;
