//! Game-session HTTP routes.
//!
//! Thin handlers: path validation happens in the [`GameId`] extractor,
//! body validation in [`ValidatedJson`], and everything else in the
//! game-flow service. Handlers only pick the status code and serialize
//! the resulting session snapshot.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::session::{Actor, GamePatch};
use crate::error::AppError;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::games::GameFlowService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub first_actor: Actor,
}

#[derive(Debug, Deserialize)]
pub struct HintRequest {
    pub word: String,
}

#[derive(Debug, Serialize)]
pub struct HintResponse {
    pub hint: String,
}

/// POST /games
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let session = GameFlowService::new().create_game(&app_state.games, body.first_actor)?;
    info!(game_id = %session.game_id, "game created");
    Ok(HttpResponse::Created().json(session))
}

/// GET /games
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.games.list()))
}

/// GET /games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = app_state.games.get(game_id.as_str())?;
    Ok(HttpResponse::Ok().json(session))
}

/// PATCH /games/{game_id}
///
/// Accepts only the documented fields (`status`, `result`); unknown
/// fields are rejected by deserialization.
async fn patch_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<GamePatch>,
) -> Result<HttpResponse, AppError> {
    let session = app_state.games.patch(game_id.as_str(), &body)?;
    Ok(HttpResponse::Ok().json(session))
}

/// POST /games/{game_id}/turn/advance
async fn advance_turn(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = GameFlowService::new().advance_turn(&app_state.games, game_id.as_str())?;
    Ok(HttpResponse::Ok().json(session))
}

/// POST /games/{game_id}/capture
async fn capture(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = GameFlowService::new().capture(&app_state.games, game_id.as_str())?;
    Ok(HttpResponse::Created().json(session))
}

/// POST /games/{game_id}/ai/analyze
async fn analyze(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = GameFlowService::new().analyze_user_word(
        &app_state.games,
        app_state.words.as_ref(),
        game_id.as_str(),
    )?;
    if session.is_finished() {
        info!(game_id = %session.game_id, result = ?session.result, "game finished");
    }
    Ok(HttpResponse::Ok().json(session))
}

/// POST /games/{game_id}/ai/next
async fn ai_next(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = GameFlowService::new().generate_ai_word(
        &app_state.games,
        app_state.words.as_ref(),
        game_id.as_str(),
    )?;
    if session.is_finished() {
        info!(game_id = %session.game_id, result = ?session.result, "game finished");
    }
    Ok(HttpResponse::Created().json(session))
}

/// POST /games/{game_id}/ai/hint
async fn hint(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<HintRequest>,
) -> Result<web::Json<HintResponse>, AppError> {
    let hint = GameFlowService::new().hint(
        &app_state.games,
        app_state.words.as_ref(),
        game_id.as_str(),
        &body.word,
    )?;
    Ok(web::Json(HintResponse { hint }))
}

/// POST /games/{game_id}/end
async fn end_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = GameFlowService::new().end_game(&app_state.games, game_id.as_str())?;
    Ok(HttpResponse::Ok().json(session))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_game))
            .route(web::get().to(list_games)),
    );
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(get_game))
            .route(web::patch().to(patch_game)),
    );
    cfg.service(web::resource("/{game_id}/turn/advance").route(web::post().to(advance_turn)));
    cfg.service(web::resource("/{game_id}/capture").route(web::post().to(capture)));
    cfg.service(web::resource("/{game_id}/ai/analyze").route(web::post().to(analyze)));
    cfg.service(web::resource("/{game_id}/ai/next").route(web::post().to(ai_next)));
    cfg.service(web::resource("/{game_id}/ai/hint").route(web::post().to(hint)));
    cfg.service(web::resource("/{game_id}/end").route(web::post().to(end_game)));
}
