//! Canned word source - answers with fixed fixtures.
//!
//! This is the stand-in the backend ships with while the real
//! recognition and generation services live elsewhere: every user drawing
//! reads as りんご, the AI always answers ごりら, and hints are a fixed
//! template around the asked word.

use super::trait_def::{WordSource, WordSourceError};
use crate::domain::session::GameSession;

/// Fixed-fixture word source.
pub struct CannedWords;

impl CannedWords {
    pub const NAME: &'static str = "CannedWords";
    pub const VERSION: &'static str = "1.0.0";

    /// Word every user drawing recognizes as.
    pub const RECOGNIZED_WORD: &'static str = "りんご";
    /// Word the AI always plays.
    pub const GENERATED_WORD: &'static str = "ごりら";

    pub fn new() -> Self {
        Self
    }
}

impl Default for CannedWords {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for CannedWords {
    fn recognize(&self, _session: &GameSession) -> Result<String, WordSourceError> {
        Ok(Self::RECOGNIZED_WORD.to_string())
    }

    fn next_word(&self, _session: &GameSession) -> Result<String, WordSourceError> {
        Ok(Self::GENERATED_WORD.to_string())
    }

    fn hint(&self, word: &str) -> Result<String, WordSourceError> {
        Ok(format!("ヒント: {word} に関するヒントです"))
    }
}
