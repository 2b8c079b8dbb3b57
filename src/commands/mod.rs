//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and a [`Session`], and runs the operation against the store.

pub mod add;
pub mod copy;
pub mod delete;
pub mod list;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use copy::execute as copy;
pub use delete::execute as delete;
pub use list::execute as list;

use std::io::Write;

use crate::store::Store;
use crate::ui::{ClipboardWriter, TextSource};

/// Everything a command handler touches during one invocation
pub struct Session<'a> {
    pub store: &'a Store,
    pub clipboard: &'a mut dyn ClipboardWriter,
    pub input: &'a mut dyn TextSource,
    pub out: &'a mut dyn Write,
}

/// How a command finished
///
/// Misses and cancellations are reported to the user by the handler itself;
/// they are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked
    Done,
    /// The requested section or key does not exist
    NotFound,
    /// The user cancelled the prompt
    Cancelled,
}
