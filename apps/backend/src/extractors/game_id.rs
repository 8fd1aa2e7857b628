use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Game id extracted from the route path parameter.
/// Validates that the game exists in the session registry, so handlers
/// behind this extractor never see an unknown id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GameId(pub String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for GameId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<GameId, AppError> {
    let game_id = req
        .match_info()
        .get("game_id")
        .ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
        })?
        .to_string();

    if game_id.is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            "Game id must not be empty",
        ));
    }

    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    if !app_state.games.contains(&game_id) {
        return Err(AppError::not_found(
            ErrorCode::GameNotFound,
            format!("Game {game_id} not found"),
        ));
    }

    Ok(GameId(game_id))
}
