use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use audio_record_core::buffer::direct_buffer::DirectBuffer;
use audio_record_core::models::config::RecordConfiguration;
use audio_record_core::models::encoding::Encoding;
use audio_record_core::models::error::RecordError;
use audio_record_core::models::status;
use audio_record_core::registry::source_registry::{Installation, SourceRegistry};
use audio_record_core::traits::record_source::AudioRecordSource;

use crate::buffer_size;
use crate::diagnostics::{ReadKind, SessionDiagnostics};

/// Source obtained from one installation of the registry.
struct ResolvedSource {
    installation: Arc<Installation>,
    source: Arc<dyn AudioRecordSource>,
}

/// One simulated native record handle.
///
/// Every read resolves the current source through the injected
/// [`SourceRegistry`] and forwards the call verbatim: counts and error codes
/// come back exactly as the source produced them.
///
/// The factory is invoked once per installation. While the same factory stays
/// installed the session keeps reusing the source it got; once another factory
/// (or the default, after `reset`) is installed, the next read resolves again.
///
/// ```text
/// read_*() → SourceRegistry::get() → factory() → AudioRecordSource::read_in_*()
/// ```
pub struct CaptureSession {
    id: Uuid,
    registry: Arc<SourceRegistry>,
    config: RecordConfiguration,
    buffer_size_in_bytes: i32,
    resolved: Mutex<Option<ResolvedSource>>,
    diagnostics: Mutex<SessionDiagnostics>,
}

impl CaptureSession {
    /// Validate `config` and open a session reading through `registry`.
    ///
    /// Without an explicit buffer size the minimum buffer size is used, so an
    /// encoding the size query rejects fails here with `BadValue`.
    pub fn new(registry: Arc<SourceRegistry>, config: RecordConfiguration) -> Result<Self, RecordError> {
        config.validate().map_err(RecordError::BadValue)?;

        let frame_size = config
            .frame_size_in_bytes()
            .ok_or_else(|| RecordError::BadValue(format!("unsupported encoding: {}", config.encoding.raw())))?;

        let buffer_size_in_bytes = match config.buffer_size_in_bytes {
            Some(size) => size,
            None => {
                let min = buffer_size::min_buffer_size(config.sample_rate_hz, config.channel_count, config.encoding);
                if status::is_error(min) {
                    return Err(RecordError::BadValue(format!(
                        "no minimum buffer size for encoding {}",
                        config.encoding.raw()
                    )));
                }
                min
            }
        };
        if buffer_size_in_bytes < frame_size {
            return Err(RecordError::BadValue(format!(
                "buffer size {} is smaller than one frame ({} bytes)",
                buffer_size_in_bytes, frame_size
            )));
        }

        let id = Uuid::new_v4();
        log::debug!(
            "Opened capture session {}: {} Hz, {} channel(s), {:?}, buffer {} bytes",
            id,
            config.sample_rate_hz,
            config.channel_count,
            config.encoding,
            buffer_size_in_bytes
        );

        Ok(Self {
            id,
            registry,
            config,
            buffer_size_in_bytes,
            resolved: Mutex::new(None),
            diagnostics: Mutex::new(SessionDiagnostics::default()),
        })
    }

    pub fn with_defaults(registry: Arc<SourceRegistry>) -> Result<Self, RecordError> {
        Self::new(registry, RecordConfiguration::default())
    }

    /// Minimum buffer size query. See [`buffer_size::min_buffer_size`].
    pub fn min_buffer_size(sample_rate_hz: i32, channel_count: i32, encoding: Encoding) -> i32 {
        buffer_size::min_buffer_size(sample_rate_hz, channel_count, encoding)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &RecordConfiguration {
        &self.config
    }

    pub fn buffer_size_in_bytes(&self) -> i32 {
        self.buffer_size_in_bytes
    }

    pub fn diagnostics(&self) -> SessionDiagnostics {
        self.diagnostics.lock().clone()
    }

    /// Start recording. Always succeeds; no synchronisation takes place.
    pub fn start(&self, sync_event: i32, session_id: i32) -> i32 {
        log::debug!(
            "Starting capture session {} (sync event {}, audio session {})",
            self.id,
            sync_event,
            session_id
        );
        let mut diagnostics = self.diagnostics.lock();
        diagnostics.start_count += 1;
        diagnostics.last_session_id = Some(session_id);
        status::SUCCESS
    }

    /// The source reads are currently forwarded to.
    pub fn source(&self) -> Arc<dyn AudioRecordSource> {
        let current = self.registry.get();
        let mut resolved = self.resolved.lock();
        if let Some(ref cached) = *resolved {
            if Arc::ptr_eq(&cached.installation, &current) {
                return Arc::clone(&cached.source);
            }
        }

        let source = current.source();
        log::trace!("Session {} resolved source from {:?} factory", self.id, current.kind());
        self.diagnostics.lock().source_resolutions += 1;
        *resolved = Some(ResolvedSource {
            installation: current,
            source: Arc::clone(&source),
        });
        source
    }

    pub fn read_bytes(&self, audio_data: &mut [u8], offset_in_bytes: i32, size_in_bytes: i32) -> i32 {
        self.read_bytes_blocking(audio_data, offset_in_bytes, size_in_bytes, true)
    }

    pub fn read_bytes_blocking(
        &self,
        audio_data: &mut [u8],
        offset_in_bytes: i32,
        size_in_bytes: i32,
        is_blocking: bool,
    ) -> i32 {
        let code = self
            .source()
            .read_in_byte_array(audio_data, offset_in_bytes, size_in_bytes, is_blocking);
        self.finish_read(ReadKind::Bytes, size_in_bytes, code)
    }

    pub fn read_shorts(&self, audio_data: &mut [i16], offset_in_shorts: i32, size_in_shorts: i32) -> i32 {
        self.read_shorts_blocking(audio_data, offset_in_shorts, size_in_shorts, true)
    }

    pub fn read_shorts_blocking(
        &self,
        audio_data: &mut [i16],
        offset_in_shorts: i32,
        size_in_shorts: i32,
        is_blocking: bool,
    ) -> i32 {
        let code = self
            .source()
            .read_in_short_array(audio_data, offset_in_shorts, size_in_shorts, is_blocking);
        self.finish_read(ReadKind::Shorts, size_in_shorts, code)
    }

    pub fn read_floats(&self, audio_data: &mut [f32], offset_in_floats: i32, size_in_floats: i32) -> i32 {
        self.read_floats_blocking(audio_data, offset_in_floats, size_in_floats, true)
    }

    pub fn read_floats_blocking(
        &self,
        audio_data: &mut [f32],
        offset_in_floats: i32,
        size_in_floats: i32,
        is_blocking: bool,
    ) -> i32 {
        let code = self
            .source()
            .read_in_float_array(audio_data, offset_in_floats, size_in_floats, is_blocking);
        self.finish_read(ReadKind::Floats, size_in_floats, code)
    }

    pub fn read_direct(&self, buffer: &DirectBuffer, size_in_bytes: i32) -> i32 {
        self.read_direct_blocking(buffer, size_in_bytes, true)
    }

    /// Read into a direct buffer.
    ///
    /// The source receives a duplicate: the caller's position, limit and mark
    /// stay where they were, only the contents change.
    pub fn read_direct_blocking(&self, buffer: &DirectBuffer, size_in_bytes: i32, is_blocking: bool) -> i32 {
        let mut view = buffer.duplicate();
        let code = self
            .source()
            .read_in_direct_buffer(&mut view, size_in_bytes, is_blocking);
        self.finish_read(ReadKind::Direct, size_in_bytes, code)
    }

    fn finish_read(&self, kind: ReadKind, requested: i32, code: i32) -> i32 {
        log::trace!("Session {} {:?} read: requested {}, returned {}", self.id, kind, requested, code);
        self.diagnostics.lock().record_read(kind, code);
        code
    }
}

impl std::fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("buffer_size_in_bytes", &self.buffer_size_in_bytes)
            .finish_non_exhaustive()
    }
}
