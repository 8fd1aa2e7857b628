use serde::{Deserialize, Serialize};

/// Who acts on a given turn: the human player or the AI opponent.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    User,
    Ai,
}

impl Actor {
    /// The other side of the table.
    pub fn opponent(self) -> Self {
        match self {
            Actor::User => Actor::Ai,
            Actor::Ai => Actor::User,
        }
    }
}

/// Overall session lifecycle states.
///
/// `Aborted` is a terminal state reachable only through an explicit
/// PATCH; no game-flow operation produces it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Created,
    Playing,
    Finished,
    Aborted,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameResult {
    AiWin,
    UserWin,
    Draw,
}

/// One turn of play. `word` and `image` start empty and are filled in by
/// the analyze/generate and capture operations; re-invocation for the same
/// turn overwrites rather than appends.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub actor: Actor,
    pub word: Option<String>,
    pub image: Option<String>,
}

impl HistoryEntry {
    pub fn open(actor: Actor) -> Self {
        Self {
            actor,
            word: None,
            image: None,
        }
    }
}

/// One played game instance.
///
/// Invariants maintained by the engine:
/// - `history.len() == turn` once play has started
/// - `result.is_some()` iff `status == Finished`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub game_id: String,
    pub first_actor: Actor,
    pub turn: u32,
    pub status: GameStatus,
    pub result: Option<GameResult>,
    pub history: Vec<HistoryEntry>,
}

impl GameSession {
    pub fn new(game_id: String, first_actor: Actor) -> Self {
        Self {
            game_id,
            first_actor,
            turn: 0,
            status: GameStatus::Created,
            result: None,
            history: Vec::new(),
        }
    }

    /// Actor for a 1-based turn number: `first_actor` on odd turns, the
    /// opponent on even turns.
    pub fn actor_for_turn(&self, turn: u32) -> Actor {
        if turn % 2 == 1 {
            self.first_actor
        } else {
            self.first_actor.opponent()
        }
    }

    /// The entry for the most recently advanced turn, if any turn has
    /// been played.
    pub fn latest_entry_mut(&mut self) -> Option<&mut HistoryEntry> {
        self.history.last_mut()
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}

/// List-view projection of a session: id plus outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOverview {
    pub game_id: String,
    pub result: Option<GameResult>,
}

impl From<&GameSession> for GameOverview {
    fn from(session: &GameSession) -> Self {
        Self {
            game_id: session.game_id.clone(),
            result: session.result,
        }
    }
}

/// Partial update accepted by PATCH. Only `status` and `result` may be
/// written out of band; anything else is rejected at deserialization so
/// invariant-bearing fields (`turn`, `history`) cannot be patched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GamePatch {
    pub status: Option<GameStatus>,
    pub result: Option<GameResult>,
}
