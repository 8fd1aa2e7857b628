//! Pure turn/phase transitions for a [`GameSession`].
//!
//! Nothing here touches stores, locks, or collaborators; callers obtain a
//! word (or image reference) elsewhere and apply it through these
//! functions. Every operation either completes fully or returns an error
//! without mutating the session.

use crate::domain::rules;
use crate::domain::session::{GameResult, GameSession, GameStatus, HistoryEntry};
use crate::errors::domain::{DomainError, ValidationKind};

/// Advance play by one turn.
///
/// Increments `turn`, appends an open history entry for whoever acts on
/// the new turn, and moves the session to `Playing` (idempotent when
/// already playing).
pub fn advance_turn(session: &mut GameSession) {
    session.turn += 1;
    let actor = session.actor_for_turn(session.turn);
    session.history.push(HistoryEntry::open(actor));
    session.status = GameStatus::Playing;
}

/// Record a captured drawing for the current turn.
///
/// The image reference is keyed by turn number, not entry index, so a
/// repeated capture for the same turn overwrites the same reference.
pub fn capture(session: &mut GameSession) -> Result<(), DomainError> {
    let turn = session.turn;
    let entry = require_open_turn(session)?;
    entry.image = Some(format!("turn-{turn}.png"));
    Ok(())
}

/// Record the word recognized from the user's drawing.
///
/// A word ending in the terminal syllable loses the game for the user:
/// the AI wins and the session finishes.
pub fn apply_user_word(session: &mut GameSession, word: String) -> Result<(), DomainError> {
    place_word(session, word, GameResult::AiWin)
}

/// Record the word the AI produced for its turn.
///
/// Symmetric to [`apply_user_word`]: a terminal word loses for the AI.
pub fn apply_ai_word(session: &mut GameSession, word: String) -> Result<(), DomainError> {
    place_word(session, word, GameResult::UserWin)
}

/// Force-terminate the session as a draw, regardless of current state.
/// Covers forfeits and timeouts; idempotent under repeated calls.
pub fn end(session: &mut GameSession) {
    finish(session, GameResult::Draw);
}

fn place_word(
    session: &mut GameSession,
    word: String,
    result_on_terminal: GameResult,
) -> Result<(), DomainError> {
    let chain_ended = rules::ends_chain(&word);
    let entry = require_open_turn(session)?;
    entry.word = Some(word);
    if chain_ended {
        finish(session, result_on_terminal);
    }
    Ok(())
}

fn finish(session: &mut GameSession, result: GameResult) {
    session.result = Some(result);
    session.status = GameStatus::Finished;
}

fn require_open_turn(session: &mut GameSession) -> Result<&mut HistoryEntry, DomainError> {
    let game_id = session.game_id.clone();
    session.latest_entry_mut().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::NoActiveTurn,
            format!("game {game_id} has no played turns yet"),
        )
    })
}
