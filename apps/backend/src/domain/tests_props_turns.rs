#![cfg(test)]

//! Property tests for turn advancement.

use proptest::prelude::*;

use crate::domain::engine;
use crate::domain::session::{Actor, GameSession, GameStatus};

fn any_first_actor() -> impl Strategy<Value = Actor> {
    prop_oneof![Just(Actor::User), Just(Actor::Ai)]
}

proptest! {
    /// For any number of advances, actors alternate strictly starting
    /// with the first actor, and the history length tracks the turn
    /// counter exactly.
    #[test]
    fn actors_alternate_and_history_tracks_turn(
        first_actor in any_first_actor(),
        advances in 1usize..40,
    ) {
        let mut session = GameSession::new("20240101-120000".to_string(), first_actor);

        for expected_turn in 1..=advances {
            engine::advance_turn(&mut session);

            prop_assert_eq!(session.turn as usize, expected_turn);
            prop_assert_eq!(session.history.len(), expected_turn);
            prop_assert_eq!(session.status, GameStatus::Playing);
        }

        for (index, entry) in session.history.iter().enumerate() {
            let expected = if index % 2 == 0 {
                first_actor
            } else {
                first_actor.opponent()
            };
            prop_assert_eq!(entry.actor, expected);
        }
    }

    /// Capture always tags the newest entry, whatever the turn count.
    #[test]
    fn capture_tags_the_latest_turn(
        first_actor in any_first_actor(),
        advances in 1usize..20,
    ) {
        let mut session = GameSession::new("20240101-120000".to_string(), first_actor);
        for _ in 0..advances {
            engine::advance_turn(&mut session);
        }

        engine::capture(&mut session).unwrap();

        let expected = format!("turn-{advances}.png");
        prop_assert_eq!(
            session.history.last().and_then(|e| e.image.as_deref()),
            Some(expected.as_str())
        );
        prop_assert!(session
            .history
            .iter()
            .rev()
            .skip(1)
            .all(|e| e.image.is_none()));
    }
}
