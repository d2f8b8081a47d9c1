use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::sources::default_source::DefaultSource;
use crate::traits::record_source::{AudioRecordSource, SourceFactory};

/// How the currently installed factory got there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstalledKind {
    /// Built-in factory yielding [`DefaultSource`].
    Default,
    /// Fixed instance shared by every session.
    GlobalSource,
    /// User factory invoked once per session.
    Factory,
}

/// One installed factory. Sessions compare installations by identity to
/// notice that a new factory replaced the one they resolved from.
pub struct Installation {
    kind: InstalledKind,
    factory: SourceFactory,
}

impl Installation {
    fn new(kind: InstalledKind, factory: SourceFactory) -> Self {
        Self { kind, factory }
    }

    pub fn kind(&self) -> InstalledKind {
        self.kind
    }

    /// Invoke the factory.
    pub fn source(&self) -> Arc<dyn AudioRecordSource> {
        (self.factory)()
    }
}

impl fmt::Debug for Installation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Installation")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Holder of "how to obtain a source" for every session built on it.
///
/// The installed factory lives in a single atomically swapped slot: readers
/// never block and never see a torn value, and concurrent installs resolve as
/// last writer wins. Construct one per harness, share it as
/// `Arc<SourceRegistry>`, and call [`reset`](Self::reset) in teardown.
pub struct SourceRegistry {
    slot: ArcSwap<Installation>,
    default_source: Arc<dyn AudioRecordSource>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        let default_source: Arc<dyn AudioRecordSource> = Arc::new(DefaultSource);
        Self {
            slot: ArcSwap::from_pointee(Self::default_installation(&default_source)),
            default_source,
        }
    }

    /// The most recently installed factory.
    pub fn get(&self) -> Arc<Installation> {
        self.slot.load_full()
    }

    pub fn installed_kind(&self) -> InstalledKind {
        self.slot.load().kind()
    }

    /// Install one source instance for every session.
    #[deprecated(note = "a single shared source cannot be customised per session; use `set_source_factory`")]
    pub fn set_global_source(&self, source: Arc<dyn AudioRecordSource>) {
        log::debug!("Installing global record source");
        let factory: SourceFactory = Arc::new(move || Arc::clone(&source));
        self.slot
            .store(Arc::new(Installation::new(InstalledKind::GlobalSource, factory)));
    }

    /// Install a factory invoked once per session that resolves a source
    /// while it is installed.
    pub fn set_source_factory<F>(&self, factory: F)
    where
        F: Fn() -> Arc<dyn AudioRecordSource> + Send + Sync + 'static,
    {
        log::debug!("Installing record source factory");
        self.slot
            .store(Arc::new(Installation::new(InstalledKind::Factory, Arc::new(factory))));
    }

    /// Restore the built-in default factory.
    pub fn reset(&self) {
        log::debug!("Resetting record source to default");
        self.slot
            .store(Arc::new(Self::default_installation(&self.default_source)));
    }

    fn default_installation(default_source: &Arc<dyn AudioRecordSource>) -> Installation {
        let source = Arc::clone(default_source);
        Installation::new(InstalledKind::Default, Arc::new(move || Arc::clone(&source)))
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("installed", &self.installed_kind())
            .finish()
    }
}
