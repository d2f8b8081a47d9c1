//! # audio-record-core
//!
//! Pluggable data sources for a simulated audio record device.
//!
//! Test harnesses install an [`AudioRecordSource`] (or a factory producing
//! one per session) in a [`SourceRegistry`]; the record shim resolves it on
//! every read and forwards the request unchanged.
//!
//! ## Architecture
//!
//! ```text
//! audio-record-core (this crate)
//! ├── traits/       ← AudioRecordSource, SourceFactory
//! ├── registry/     ← SourceRegistry (atomically swapped factory slot)
//! ├── sources/      ← DefaultSource, SampleQueueSource, FailingSource
//! ├── buffer/       ← DirectBuffer (shared storage, per-view cursor)
//! ├── models/       ← Encoding, RecordConfiguration, RecordError, status codes
//! └── processing/   ← SampleQueue, PCM16 conversion, WAV fixtures
//! ```

pub mod buffer;
pub mod models;
pub mod processing;
pub mod registry;
pub mod sources;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use buffer::direct_buffer::DirectBuffer;
pub use models::config::RecordConfiguration;
pub use models::encoding::Encoding;
pub use models::error::{BufferError, RecordError};
pub use models::status;
pub use processing::sample_queue::SampleQueue;
pub use registry::source_registry::{InstalledKind, Installation, SourceRegistry};
pub use sources::default_source::DefaultSource;
pub use sources::failing_source::FailingSource;
pub use sources::sample_queue_source::SampleQueueSource;
pub use traits::record_source::{AudioRecordSource, SourceFactory};
