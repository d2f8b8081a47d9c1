use crate::traits::record_source::AudioRecordSource;

/// Source that fulfils every request completely without writing any data.
///
/// Installed by [`SourceRegistry::reset`](crate::registry::source_registry::SourceRegistry::reset).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

impl AudioRecordSource for DefaultSource {}
