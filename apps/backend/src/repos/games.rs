//! Registry of game sessions, keyed by game id.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::session::{GameOverview, GamePatch, GameSession};
use crate::domain::Actor;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::utils::game_id;

/// In-memory session registry.
///
/// The map is ordered by id; since ids are `YYYYMMDD-HHMMSS` timestamps,
/// iteration order is creation order.
#[derive(Clone, Default)]
pub struct GameStore {
    inner: Arc<RwLock<BTreeMap<String, GameSession>>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new session with a freshly generated id.
    ///
    /// Id generation has second granularity, so two creates in the same
    /// second collide; that surfaces as a conflict instead of silently
    /// replacing the earlier session.
    pub fn create(&self, first_actor: Actor) -> Result<GameSession, DomainError> {
        self.create_with_id(game_id::generate(), first_actor)
    }

    pub fn create_with_id(
        &self,
        game_id: String,
        first_actor: Actor,
    ) -> Result<GameSession, DomainError> {
        let mut games = self.inner.write();
        if games.contains_key(&game_id) {
            return Err(DomainError::conflict(
                ConflictKind::GameIdCollision,
                format!("game id {game_id} already exists"),
            ));
        }
        let session = GameSession::new(game_id.clone(), first_actor);
        games.insert(game_id, session.clone());
        Ok(session)
    }

    /// Snapshot of a session.
    pub fn get(&self, game_id: &str) -> Result<GameSession, DomainError> {
        self.inner
            .read()
            .get(game_id)
            .cloned()
            .ok_or_else(|| not_found(game_id))
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.inner.read().contains_key(game_id)
    }

    /// Snapshot of all sessions as `{gameId, result}` pairs, in creation
    /// order.
    pub fn list(&self) -> Vec<GameOverview> {
        self.inner.read().values().map(GameOverview::from).collect()
    }

    /// Merge the documented patchable fields; anything absent from the
    /// patch is left untouched.
    pub fn patch(&self, game_id: &str, patch: &GamePatch) -> Result<GameSession, DomainError> {
        let patch = patch.clone();
        self.update(game_id, move |session| {
            if let Some(status) = patch.status {
                session.status = status;
            }
            if let Some(result) = patch.result {
                session.result = Some(result);
            }
            Ok(())
        })
    }

    /// Apply `mutate` to the session under the write lock.
    ///
    /// The closure runs against a clone which is committed only on `Ok`,
    /// so a failing operation is all-or-nothing. Holding the write lock
    /// across the closure is what serializes concurrent mutations against
    /// the same session; closures must stay free of I/O.
    pub fn update<F>(&self, game_id: &str, mutate: F) -> Result<GameSession, DomainError>
    where
        F: FnOnce(&mut GameSession) -> Result<(), DomainError>,
    {
        let mut games = self.inner.write();
        let current = games.get(game_id).ok_or_else(|| not_found(game_id))?;
        let mut next = current.clone();
        mutate(&mut next)?;
        games.insert(game_id.to_string(), next.clone());
        Ok(next)
    }
}

fn not_found(game_id: &str) -> DomainError {
    DomainError::not_found(NotFoundKind::Game, format!("game {game_id} not found"))
}
