//! Game-session flow orchestration.
//!
//! Handlers call in here; the service resolves the session, consults the
//! injected [`WordSource`] where a word is needed, and applies the pure
//! engine transitions through the store's serialized update path. Word
//! production happens against a snapshot, outside the store lock.

use crate::ai::WordSource;
use crate::domain::engine;
use crate::domain::session::{Actor, GameSession};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::GameStore;

/// Game flow service.
pub struct GameFlowService;

impl GameFlowService {
    pub fn new() -> Self {
        Self
    }

    pub fn create_game(
        &self,
        games: &GameStore,
        first_actor: Actor,
    ) -> Result<GameSession, DomainError> {
        games.create(first_actor)
    }

    /// Advance play by one turn; actors alternate starting from the
    /// session's first actor.
    pub fn advance_turn(
        &self,
        games: &GameStore,
        game_id: &str,
    ) -> Result<GameSession, DomainError> {
        games.update(game_id, |session| {
            engine::advance_turn(session);
            Ok(())
        })
    }

    /// Record a captured drawing against the current turn.
    pub fn capture(&self, games: &GameStore, game_id: &str) -> Result<GameSession, DomainError> {
        games.update(game_id, engine::capture)
    }

    /// Recognize the user's drawing into a word and apply it. A word
    /// ending in the terminal syllable finishes the game as an AI win.
    pub fn analyze_user_word(
        &self,
        games: &GameStore,
        words: &dyn WordSource,
        game_id: &str,
    ) -> Result<GameSession, DomainError> {
        let snapshot = require_open_turn(games, game_id)?;
        let word = words.recognize(&snapshot)?;
        games.update(game_id, |session| engine::apply_user_word(session, word))
    }

    /// Ask the word generator for the AI's move and apply it. A terminal
    /// word finishes the game as a user win.
    pub fn generate_ai_word(
        &self,
        games: &GameStore,
        words: &dyn WordSource,
        game_id: &str,
    ) -> Result<GameSession, DomainError> {
        let snapshot = require_open_turn(games, game_id)?;
        let word = words.next_word(&snapshot)?;
        games.update(game_id, |session| engine::apply_ai_word(session, word))
    }

    /// Stateless hint lookup for the given word. Validates the session
    /// exists but never mutates it.
    pub fn hint(
        &self,
        games: &GameStore,
        words: &dyn WordSource,
        game_id: &str,
        word: &str,
    ) -> Result<String, DomainError> {
        if word.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyWord,
                "word must not be empty",
            ));
        }
        games.get(game_id)?;
        Ok(words.hint(word)?)
    }

    /// Force-terminate the session as a draw.
    pub fn end_game(&self, games: &GameStore, game_id: &str) -> Result<GameSession, DomainError> {
        games.update(game_id, |session| {
            engine::end(session);
            Ok(())
        })
    }
}

impl Default for GameFlowService {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot the session, insisting that at least one turn is open.
///
/// Word production consults the collaborator before taking the write
/// lock, so the precondition is checked here as well as inside the
/// engine; either way the caller sees the same validation error.
fn require_open_turn(games: &GameStore, game_id: &str) -> Result<GameSession, DomainError> {
    let snapshot = games.get(game_id)?;
    if snapshot.history.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::NoActiveTurn,
            format!("game {game_id} has no played turns yet"),
        ));
    }
    Ok(snapshot)
}
