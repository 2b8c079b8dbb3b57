//! UI abstraction layer
//!
//! The commands never talk to the terminal or the desktop directly. They go
//! through two narrow traits so the same handlers run against a real session
//! or against in-memory doubles in tests.
//!
//! # Core Traits
//!
//! - **`TextSource`** - Reads statement text for `add`
//! - **`ClipboardWriter`** - Places a statement on the clipboard for `copy`
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   commands (copy, add, ...)  │
//! └──────────────┬───────────────┘
//!                │ Uses traits
//!                ▼
//! ┌──────────────────────────────┐
//! │ TextSource / ClipboardWriter │
//! └──────────────┬───────────────┘
//!         ┌──────┴───────┐
//!         ▼              ▼
//! ┌───────────────┐ ┌────────────────┐
//! │ DialoguerInput│ │ ScriptedInput  │
//! │ PipedInput    │ │ MemoryClipboard│
//! │ SystemClipbrd │ │   (mock)       │
//! └───────────────┘ └────────────────┘
//! ```

pub mod clipboard;
pub mod input;
pub mod mock;

pub use clipboard::{ClipboardError, ClipboardWriter, SystemClipboard};
pub use input::{DialoguerInput, InputError, PipedInput, TextSource};
pub use mock::{MemoryClipboard, ScriptedInput};
