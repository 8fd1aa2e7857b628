//! How to register your word source
//!
//! 1) Implement `WordSource` for your type in its module.
//! 2) Add a new `WordSourceFactory` entry to the static list with stable
//!    `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.

use std::sync::Arc;

use crate::ai::{CannedWords, ScriptedWords, WordSource};

/// Factory definition for constructing word source implementations.
pub struct WordSourceFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn() -> Arc<dyn WordSource>,
}

static WORD_SOURCE_FACTORIES: &[WordSourceFactory] = &[
    WordSourceFactory {
        name: CannedWords::NAME,
        version: CannedWords::VERSION,
        make: make_canned,
    },
    WordSourceFactory {
        name: ScriptedWords::NAME,
        version: ScriptedWords::VERSION,
        make: make_scripted,
    },
];

/// Returns the statically registered word source factories.
pub fn registered_sources() -> &'static [WordSourceFactory] {
    WORD_SOURCE_FACTORIES
}

/// Finds a registered factory by its name.
pub fn by_name(name: &str) -> Option<&'static WordSourceFactory> {
    registered_sources()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_canned() -> Arc<dyn WordSource> {
    Arc::new(CannedWords::new())
}

fn make_scripted() -> Arc<dyn WordSource> {
    Arc::new(ScriptedWords::demo())
}
