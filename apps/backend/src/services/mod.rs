//! Orchestration services between the HTTP layer and the domain.

pub mod games;
pub mod jobs;

pub use games::GameFlowService;
pub use jobs::JobService;
