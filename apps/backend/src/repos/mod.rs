//! In-memory registries for sessions and jobs.
//!
//! Both stores are owned state objects handed around through
//! [`AppState`](crate::state::app_state::AppState); nothing here is a
//! module-level singleton. Mutation serializes through a write lock and
//! commits clone-then-swap, so a failed operation leaves no partial state
//! and readers always observe a consistent snapshot.

pub mod games;
pub mod jobs;

pub use games::GameStore;
pub use jobs::JobStore;
