//! Word source trait definition.

use std::fmt;

use crate::domain::session::GameSession;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Errors that can occur while producing a word or hint.
#[derive(Debug)]
pub enum WordSourceError {
    /// The collaborator did not answer within its deadline
    Timeout,
    /// The collaborator failed internally
    Internal(String),
    /// The collaborator produced an unusable word
    InvalidWord(String),
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSourceError::Timeout => write!(f, "word source timeout"),
            WordSourceError::Internal(msg) => write!(f, "word source internal error: {msg}"),
            WordSourceError::InvalidWord(msg) => write!(f, "word source invalid word: {msg}"),
        }
    }
}

impl std::error::Error for WordSourceError {}

impl From<WordSourceError> for DomainError {
    fn from(err: WordSourceError) -> Self {
        DomainError::infra(InfraErrorKind::WordSource, err.to_string())
    }
}

/// Strategy interface over the external language collaborators.
///
/// The state machine never inspects drawings or invents vocabulary
/// itself; implementations receive the session snapshot and answer with
/// plain words. Swapping in a real recognizer/generator must not touch
/// the engine.
pub trait WordSource: Send + Sync {
    /// Recognize the word drawn on the latest turn's canvas.
    fn recognize(&self, session: &GameSession) -> Result<String, WordSourceError>;

    /// Produce the AI's word for its latest turn.
    fn next_word(&self, session: &GameSession) -> Result<String, WordSourceError>;

    /// Produce a hint for the given word.
    fn hint(&self, word: &str) -> Result<String, WordSourceError>;
}
