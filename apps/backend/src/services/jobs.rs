//! Slide/plot job scheduling.
//!
//! Create-and-poll only: creation validates inputs and registers the job
//! at the start of its progression, then returns immediately. Rendering
//! workers move the record along through the store's worker seam; clients
//! poll the status endpoints with their own backoff until `done` or
//! `error`.

use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::games::GameStore;
use crate::repos::jobs::{JobStore, PlotJob, SlideJob};

/// Job scheduling service.
pub struct JobService;

impl JobService {
    pub fn new() -> Self {
        Self
    }

    /// Accept a slide job for the given game. `length_mm` is the physical
    /// slide length and must be positive.
    pub fn create_slide_job(
        &self,
        games: &GameStore,
        jobs: &JobStore,
        game_id: &str,
        length_mm: u32,
    ) -> Result<SlideJob, DomainError> {
        if length_mm == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidSlideLength,
                "slide length must be a positive number of millimetres",
            ));
        }
        games.get(game_id)?;
        Ok(jobs.create_slide(game_id, length_mm))
    }

    /// Accept a plot job for the given word.
    pub fn create_plot_job(
        &self,
        games: &GameStore,
        jobs: &JobStore,
        game_id: &str,
        word: &str,
    ) -> Result<PlotJob, DomainError> {
        if word.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyWord,
                "word must not be empty",
            ));
        }
        games.get(game_id)?;
        Ok(jobs.create_plot(game_id))
    }

    pub fn get_slide_job(&self, jobs: &JobStore, job_id: &str) -> Result<SlideJob, DomainError> {
        jobs.get_slide(job_id)
    }

    pub fn get_plot_job(&self, jobs: &JobStore, job_id: &str) -> Result<PlotJob, DomainError> {
        jobs.get_plot(job_id)
    }
}

impl Default for JobService {
    fn default() -> Self {
        Self::new()
    }
}
