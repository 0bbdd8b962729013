// src/server/state.rs
// =============================================================================
// Shared state handed to every handler: the project source and its cache.
// =============================================================================

use std::sync::Arc;

use crate::source::ProjectSource;

pub struct AppState {
    pub source: ProjectSource,
}

impl AppState {
    pub fn new(source: ProjectSource) -> Arc<Self> {
        Arc::new(Self { source })
    }
}
