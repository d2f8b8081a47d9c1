/// Read shapes of the record surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadKind {
    Bytes,
    Shorts,
    Floats,
    Direct,
}

/// Counters for debugging a capture session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDiagnostics {
    pub start_count: u64,
    pub last_session_id: Option<i32>,
    pub byte_reads: u64,
    pub short_reads: u64,
    pub float_reads: u64,
    pub direct_reads: u64,
    /// Number of times a source factory was invoked for this session.
    pub source_resolutions: u64,
    pub last_status: Option<i32>,
}

impl SessionDiagnostics {
    pub(crate) fn record_read(&mut self, kind: ReadKind, status: i32) {
        match kind {
            ReadKind::Bytes => self.byte_reads += 1,
            ReadKind::Shorts => self.short_reads += 1,
            ReadKind::Floats => self.float_reads += 1,
            ReadKind::Direct => self.direct_reads += 1,
        }
        self.last_status = Some(status);
    }

    pub fn total_reads(&self) -> u64 {
        self.byte_reads + self.short_reads + self.float_reads + self.direct_reads
    }
}
