use std::sync::Arc;

use crate::ai::{CannedWords, WordSource};
use crate::repos::games::GameStore;
use crate::repos::jobs::JobStore;

/// Application state containing shared resources.
///
/// Cloning is cheap: the stores share their maps and the word source is
/// reference-counted, so every worker thread sees the same registries.
#[derive(Clone)]
pub struct AppState {
    /// Session registry
    pub games: GameStore,
    /// Slide/plot job registry
    pub jobs: JobStore,
    /// Injected word recognition/generation/hint strategy
    pub words: Arc<dyn WordSource>,
}

impl AppState {
    /// Create a new AppState with the given word source
    pub fn new(words: Arc<dyn WordSource>) -> Self {
        Self {
            games: GameStore::new(),
            jobs: JobStore::new(),
            words,
        }
    }

    /// AppState backed by the canned word fixtures (the default when no
    /// real collaborators are wired in)
    pub fn with_canned_words() -> Self {
        Self::new(Arc::new(CannedWords::new()))
    }
}
