//! Scripted word source - plays a configured sequence.
//!
//! Each answer is selected by the turn being answered, so the same turn
//! asked twice gets the same word and the script is independent of call
//! count. Useful for demos and for tests that need a terminal-syllable
//! word on a known turn.

use super::trait_def::{WordSource, WordSourceError};
use crate::domain::session::GameSession;

pub struct ScriptedWords {
    words: Vec<String>,
}

impl ScriptedWords {
    pub const NAME: &'static str = "ScriptedWords";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Demo script: a short legal chain.
    pub fn demo() -> Self {
        Self::new(["りんご", "ごりら", "らっぱ", "ぱんだ"])
    }

    fn word_for(&self, session: &GameSession) -> Result<String, WordSourceError> {
        if self.words.is_empty() {
            return Err(WordSourceError::Internal("script is empty".to_string()));
        }
        if session.turn == 0 {
            return Err(WordSourceError::InvalidWord(
                "no turn to answer for".to_string(),
            ));
        }
        let index = ((session.turn - 1) as usize) % self.words.len();
        Ok(self.words[index].clone())
    }
}

impl WordSource for ScriptedWords {
    fn recognize(&self, session: &GameSession) -> Result<String, WordSourceError> {
        self.word_for(session)
    }

    fn next_word(&self, session: &GameSession) -> Result<String, WordSourceError> {
        self.word_for(session)
    }

    fn hint(&self, word: &str) -> Result<String, WordSourceError> {
        Ok(format!("ヒント: {word} に関するヒントです"))
    }
}
