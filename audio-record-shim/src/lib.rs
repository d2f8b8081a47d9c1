//! # audio-record-shim
//!
//! Simulated native audio record surface for test harnesses.
//!
//! Provides:
//! - `CaptureSession`: start and the four read families (bytes, `i16`,
//!   `f32`, direct buffer), each forwarded to the installed source
//! - `buffer_size`: the minimum buffer size query
//! - `SessionDiagnostics`: per-session read counters
//!
//! ## Usage
//! ```ignore
//! use std::sync::Arc;
//! use audio_record_core::{AudioRecordSource, SampleQueueSource, SourceRegistry};
//! use audio_record_shim::CaptureSession;
//!
//! let registry = Arc::new(SourceRegistry::new());
//! registry.set_source_factory(|| -> Arc<dyn AudioRecordSource> {
//!     Arc::new(SampleQueueSource::with_samples(&[0.25; 480]))
//! });
//!
//! let session = CaptureSession::with_defaults(Arc::clone(&registry)).unwrap();
//! session.start(0, 0);
//! let mut pcm = [0i16; 480];
//! assert_eq!(session.read_shorts(&mut pcm, 0, 480), 480);
//!
//! registry.reset(); // per-test teardown
//! ```

pub mod buffer_size;
pub mod capture_session;
pub mod diagnostics;

pub use buffer_size::{min_buffer_size, min_buffer_size_raw};
pub use capture_session::CaptureSession;
pub use diagnostics::{ReadKind, SessionDiagnostics};
