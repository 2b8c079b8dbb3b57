//! Testing utilities for grok-cache
//!
//! This module provides a `Harness` that wires a temporary store, an
//! in-memory clipboard, scripted input and a captured output buffer into a
//! command [`Session`].
//!
//! Only available when compiled with `cfg(test)`.

use tempfile::TempDir;

use crate::commands::Session;
use crate::store::Store;
use crate::ui::{MemoryClipboard, ScriptedInput};

/// Temporary store plus test doubles for every command collaborator
///
/// The backing directory is removed when the harness is dropped.
pub struct Harness {
    _dir: TempDir,
    pub store: Store,
    pub clipboard: MemoryClipboard,
    pub input: ScriptedInput,
    pub out: Vec<u8>,
}

impl Harness {
    /// Create a harness with an empty store and no scripted input
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self::with_input(ScriptedInput::default())
    }

    /// Create a harness whose prompts are answered by `input`
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn with_input(input: ScriptedInput) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = Store::new(dir.path().join("cache.toml"));

        Self {
            _dir: dir,
            store,
            clipboard: MemoryClipboard::new(),
            input,
            out: Vec::new(),
        }
    }

    /// Write a statement straight into the store
    ///
    /// # Panics
    /// Panics if the store cannot be written.
    pub fn seed(&self, section: &str, key: &str, text: &str) {
        self.store
            .put(section, key, text.to_string())
            .expect("Failed to seed store");
    }

    /// Borrow the collaborators as a command session
    pub fn session(&mut self) -> Session<'_> {
        Session {
            store: &self.store,
            clipboard: &mut self.clipboard,
            input: &mut self.input,
            out: &mut self.out,
        }
    }

    /// Everything written to the session output so far
    #[must_use]
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}
