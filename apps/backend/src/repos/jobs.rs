//! Registry of asynchronous job records (slide and plot generation).
//!
//! The HTTP surface only creates jobs and reads their status; walking a
//! job through its progression is the renderer workers' business, done
//! through the `advance_*`/`fail_*` seam. Records are kept for the
//! process lifetime; there is no eviction.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Job kinds, used for id derivation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum JobKind {
    Slide,
    Plot,
}

impl JobKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            JobKind::Slide => "slide",
            JobKind::Plot => "plot",
        }
    }
}

/// Derive the id for a job from its inputs.
///
/// Ids are a pure function of (game, kind, discriminator): identical
/// requests map to the same id, and callers treat the collision as an
/// idempotent retry.
pub fn derive_job_id(game_id: &str, kind: JobKind, discriminator: &str) -> String {
    format!("job-{game_id}-{}-{discriminator}", kind.as_str())
}

/// Slide rendering progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideJobStatus {
    Pending,
    Sliding,
    Done,
    Error,
}

impl SlideJobStatus {
    /// Next stage of the linear progression; `None` from a terminal state.
    pub fn advance(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Sliding),
            Self::Sliding => Some(Self::Done),
            Self::Done | Self::Error => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }
}

/// Plot (SVG + plotter) progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotJobStatus {
    SvgGenerating,
    Plotting,
    Done,
    Error,
}

impl PlotJobStatus {
    pub fn advance(self) -> Option<Self> {
        match self {
            Self::SvgGenerating => Some(Self::Plotting),
            Self::Plotting => Some(Self::Done),
            Self::Done | Self::Error => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideJob {
    pub job_id: String,
    pub status: SlideJobStatus,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotJob {
    pub job_id: String,
    pub status: PlotJobStatus,
}

#[derive(Default)]
struct Jobs {
    slide: BTreeMap<String, SlideJob>,
    plot: BTreeMap<String, PlotJob>,
}

/// In-memory job registry. Jobs reference a game by id through their own
/// id; the session does not own them.
#[derive(Clone, Default)]
pub struct JobStore {
    inner: Arc<RwLock<Jobs>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slide job at the start of its progression. Re-creating
    /// the same (game, length) pair resets the existing record.
    pub fn create_slide(&self, game_id: &str, length_mm: u32) -> SlideJob {
        let job_id = derive_job_id(game_id, JobKind::Slide, &length_mm.to_string());
        let job = SlideJob {
            job_id: job_id.clone(),
            status: SlideJobStatus::Pending,
        };
        self.inner.write().slide.insert(job_id, job.clone());
        job
    }

    /// Register a plot job. The discriminator is fixed: one plot job per
    /// game at a time, retries collide onto the same id.
    pub fn create_plot(&self, game_id: &str) -> PlotJob {
        let job_id = derive_job_id(game_id, JobKind::Plot, "1");
        let job = PlotJob {
            job_id: job_id.clone(),
            status: PlotJobStatus::SvgGenerating,
        };
        self.inner.write().plot.insert(job_id, job.clone());
        job
    }

    pub fn get_slide(&self, job_id: &str) -> Result<SlideJob, DomainError> {
        self.inner
            .read()
            .slide
            .get(job_id)
            .cloned()
            .ok_or_else(|| job_not_found(NotFoundKind::SlideJob, job_id))
    }

    pub fn get_plot(&self, job_id: &str) -> Result<PlotJob, DomainError> {
        self.inner
            .read()
            .plot
            .get(job_id)
            .cloned()
            .ok_or_else(|| job_not_found(NotFoundKind::PlotJob, job_id))
    }

    /// Worker seam: move a slide job one stage along its progression.
    pub fn advance_slide(&self, job_id: &str) -> Result<SlideJob, DomainError> {
        let mut jobs = self.inner.write();
        let job = jobs
            .slide
            .get_mut(job_id)
            .ok_or_else(|| job_not_found(NotFoundKind::SlideJob, job_id))?;
        job.status = job
            .status
            .advance()
            .ok_or_else(|| terminal_job(job_id))?;
        Ok(job.clone())
    }

    /// Worker seam: move a plot job one stage along its progression.
    pub fn advance_plot(&self, job_id: &str) -> Result<PlotJob, DomainError> {
        let mut jobs = self.inner.write();
        let job = jobs
            .plot
            .get_mut(job_id)
            .ok_or_else(|| job_not_found(NotFoundKind::PlotJob, job_id))?;
        job.status = job
            .status
            .advance()
            .ok_or_else(|| terminal_job(job_id))?;
        Ok(job.clone())
    }

    /// Worker seam: mark a slide job failed from any non-terminal stage.
    pub fn fail_slide(&self, job_id: &str) -> Result<SlideJob, DomainError> {
        let mut jobs = self.inner.write();
        let job = jobs
            .slide
            .get_mut(job_id)
            .ok_or_else(|| job_not_found(NotFoundKind::SlideJob, job_id))?;
        if job.status.is_terminal() {
            return Err(terminal_job(job_id));
        }
        job.status = SlideJobStatus::Error;
        Ok(job.clone())
    }

    /// Worker seam: mark a plot job failed from any non-terminal stage.
    pub fn fail_plot(&self, job_id: &str) -> Result<PlotJob, DomainError> {
        let mut jobs = self.inner.write();
        let job = jobs
            .plot
            .get_mut(job_id)
            .ok_or_else(|| job_not_found(NotFoundKind::PlotJob, job_id))?;
        if job.status.is_terminal() {
            return Err(terminal_job(job_id));
        }
        job.status = PlotJobStatus::Error;
        Ok(job.clone())
    }
}

fn job_not_found(kind: NotFoundKind, job_id: &str) -> DomainError {
    DomainError::not_found(kind, format!("job {job_id} not found"))
}

fn terminal_job(job_id: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::JobAlreadyTerminal,
        format!("job {job_id} is already in a terminal status"),
    )
}
