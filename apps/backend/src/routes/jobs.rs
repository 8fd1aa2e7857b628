//! Slide/plot job HTTP routes.
//!
//! Creation answers 202 Accepted with the job id to poll; the status
//! endpoints return the current snapshot until the client sees a
//! terminal status.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::jobs::JobService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SlideRequest {
    /// Physical slide length in millimetres
    pub length: u32,
}

#[derive(Debug, Deserialize)]
pub struct PlotRequest {
    pub word: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAccepted {
    pub status: &'static str,
    pub job_id: String,
    pub message: &'static str,
}

/// POST /games/{game_id}/slide
async fn create_slide_job(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<SlideRequest>,
) -> Result<HttpResponse, AppError> {
    let job = JobService::new().create_slide_job(
        &app_state.games,
        &app_state.jobs,
        game_id.as_str(),
        body.length,
    )?;
    info!(job_id = %job.job_id, "slide job accepted");
    Ok(HttpResponse::Accepted().json(JobAccepted {
        status: "accepted",
        job_id: job.job_id,
        message: "Sliding started.",
    }))
}

/// GET /games/{game_id}/slide/{job_id}
async fn get_slide_job(
    _game_id: GameId,
    path: web::Path<(String, String)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (_, job_id) = path.into_inner();
    let job = JobService::new().get_slide_job(&app_state.jobs, &job_id)?;
    Ok(HttpResponse::Ok().json(job))
}

/// POST /games/{game_id}/ai/plot
async fn create_plot_job(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<PlotRequest>,
) -> Result<HttpResponse, AppError> {
    let job = JobService::new().create_plot_job(
        &app_state.games,
        &app_state.jobs,
        game_id.as_str(),
        &body.word,
    )?;
    info!(job_id = %job.job_id, "plot job accepted");
    Ok(HttpResponse::Accepted().json(JobAccepted {
        status: "accepted",
        job_id: job.job_id,
        message: "Plotting started.",
    }))
}

/// GET /games/{game_id}/ai/plot/{job_id}
async fn get_plot_job(
    _game_id: GameId,
    path: web::Path<(String, String)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (_, job_id) = path.into_inner();
    let job = JobService::new().get_plot_job(&app_state.jobs, &job_id)?;
    Ok(HttpResponse::Ok().json(job))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{game_id}/slide").route(web::post().to(create_slide_job)));
    cfg.service(web::resource("/{game_id}/slide/{job_id}").route(web::get().to(get_slide_job)));
    cfg.service(web::resource("/{game_id}/ai/plot").route(web::post().to(create_plot_job)));
    cfg.service(web::resource("/{game_id}/ai/plot/{job_id}").route(web::get().to(get_plot_job)));
}
