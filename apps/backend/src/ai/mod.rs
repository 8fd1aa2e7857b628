//! Word strategy module - the seam to the external language collaborators.
//!
//! This module provides:
//! - The `WordSource` trait covering recognition, generation, and hints
//! - `CannedWords`: fixed-fixture source matching the client mock
//! - `ScriptedWords`: plays a configured word sequence (tests/demos)
//! - A static registry for looking implementations up by name

mod canned;
mod scripted;
mod trait_def;

pub mod registry;

pub use canned::CannedWords;
pub use scripted::ScriptedWords;
pub use trait_def::{WordSource, WordSourceError};
