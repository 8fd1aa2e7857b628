#![cfg(test)]

use crate::domain::engine;
use crate::domain::session::{Actor, GameResult, GameSession, GameStatus};
use crate::errors::domain::{DomainError, ValidationKind};

fn session(first_actor: Actor) -> GameSession {
    GameSession::new("20240101-120000".to_string(), first_actor)
}

#[test]
fn first_advance_starts_play_with_the_first_actor() {
    let mut s = session(Actor::User);
    engine::advance_turn(&mut s);

    assert_eq!(s.turn, 1);
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.history.len(), 1);
    assert_eq!(s.history[0].actor, Actor::User);
    assert_eq!(s.history[0].word, None);
    assert_eq!(s.history[0].image, None);
}

#[test]
fn second_advance_hands_the_turn_to_the_opponent() {
    let mut s = session(Actor::User);
    engine::advance_turn(&mut s);
    engine::advance_turn(&mut s);

    assert_eq!(s.turn, 2);
    assert_eq!(s.history.len(), 2);
    assert_eq!(s.history[1].actor, Actor::Ai);
}

#[test]
fn ai_first_games_alternate_from_the_ai() {
    let mut s = session(Actor::Ai);
    engine::advance_turn(&mut s);
    engine::advance_turn(&mut s);
    engine::advance_turn(&mut s);

    let actors: Vec<Actor> = s.history.iter().map(|e| e.actor).collect();
    assert_eq!(actors, vec![Actor::Ai, Actor::User, Actor::Ai]);
}

#[test]
fn capture_writes_an_image_keyed_by_turn_number() {
    let mut s = session(Actor::User);
    engine::advance_turn(&mut s);
    engine::advance_turn(&mut s);

    engine::capture(&mut s).unwrap();
    assert_eq!(s.history[1].image.as_deref(), Some("turn-2.png"));
    // first entry untouched
    assert_eq!(s.history[0].image, None);

    // repeated capture overwrites the same reference
    engine::capture(&mut s).unwrap();
    assert_eq!(s.history[1].image.as_deref(), Some("turn-2.png"));
}

#[test]
fn capture_without_history_is_rejected() {
    let mut s = session(Actor::User);
    let err = engine::capture(&mut s).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::NoActiveTurn, _)
    ));
    assert_eq!(s.turn, 0);
}

#[test]
fn ordinary_user_word_keeps_the_game_going() {
    let mut s = session(Actor::User);
    engine::advance_turn(&mut s);
    engine::apply_user_word(&mut s, "りんご".to_string()).unwrap();

    assert_eq!(s.history[0].word.as_deref(), Some("りんご"));
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.result, None);
}

#[test]
fn terminal_user_word_finishes_as_ai_win() {
    let mut s = session(Actor::User);
    engine::advance_turn(&mut s);
    engine::apply_user_word(&mut s, "みかん".to_string()).unwrap();

    assert_eq!(s.result, Some(GameResult::AiWin));
    assert_eq!(s.status, GameStatus::Finished);
    assert_eq!(s.history[0].word.as_deref(), Some("みかん"));
}

#[test]
fn terminal_ai_word_finishes_as_user_win() {
    let mut s = session(Actor::Ai);
    engine::advance_turn(&mut s);
    engine::apply_ai_word(&mut s, "ぱん".to_string()).unwrap();

    assert_eq!(s.result, Some(GameResult::UserWin));
    assert_eq!(s.status, GameStatus::Finished);
}

#[test]
fn reapplying_a_word_overwrites_in_place() {
    let mut s = session(Actor::User);
    engine::advance_turn(&mut s);
    engine::apply_user_word(&mut s, "りんご".to_string()).unwrap();
    engine::apply_user_word(&mut s, "らくだ".to_string()).unwrap();

    assert_eq!(s.history.len(), 1);
    assert_eq!(s.history[0].word.as_deref(), Some("らくだ"));
}

#[test]
fn end_forces_a_draw_from_any_state() {
    let mut fresh = session(Actor::User);
    engine::end(&mut fresh);
    assert_eq!(fresh.result, Some(GameResult::Draw));
    assert_eq!(fresh.status, GameStatus::Finished);

    let mut finished = session(Actor::User);
    engine::advance_turn(&mut finished);
    engine::apply_user_word(&mut finished, "みかん".to_string()).unwrap();
    engine::end(&mut finished);
    assert_eq!(finished.result, Some(GameResult::Draw));
    assert_eq!(finished.status, GameStatus::Finished);

    // idempotent
    engine::end(&mut finished);
    assert_eq!(finished.result, Some(GameResult::Draw));
}
