use envmon_core::loader::SampleStore;

/// Shared application state: the one dataset cache behind every request.
#[derive(Debug, Default)]
pub struct AppState {
    pub samples: SampleStore,
}

impl AppState {
    pub fn new() -> Self {
        Self { samples: SampleStore::new() }
    }
}
