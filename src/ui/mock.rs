//! In-memory stand-ins for the clipboard and the text prompt
//!
//! Useful for testing without requiring a desktop session or a terminal.

use std::collections::VecDeque;

use super::clipboard::{ClipboardError, ClipboardWriter};
use super::input::{Result, TextSource};

/// Clipboard that records what was copied
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    /// Last text written, if any
    pub contents: Option<String>,
    /// Whether to simulate a missing clipboard
    pub unavailable: bool,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard that fails every write
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            contents: None,
            unavailable: true,
        }
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> std::result::Result<(), ClipboardError> {
        if self.unavailable {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Text source that replays predetermined answers
///
/// `None` entries simulate the user cancelling. Once the script runs out,
/// further reads cancel as well.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    responses: VecDeque<Option<String>>,
    /// Prompts shown so far, in order
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    /// Create a source that answers each prompt with the next response
    #[must_use]
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(|s| Some(s.into())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Create a source whose first prompt is cancelled
    #[must_use]
    pub fn cancelled() -> Self {
        Self {
            responses: VecDeque::from([None]),
            prompts: Vec::new(),
        }
    }

    /// Queue another answer
    pub fn push(&mut self, response: impl Into<String>) {
        self.responses.push_back(Some(response.into()));
    }
}

impl TextSource for ScriptedInput {
    fn read_text(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.responses.pop_front().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_records_text() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.set_text("hey there").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("hey there"));
    }

    #[test]
    fn test_memory_clipboard_unavailable() {
        let mut clipboard = MemoryClipboard::unavailable();
        assert!(clipboard.set_text("hey").is_err());
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_scripted_input_replays_then_cancels() {
        let mut input = ScriptedInput::new(["one", "two"]);
        assert_eq!(input.read_text("p1").unwrap().as_deref(), Some("one"));
        assert_eq!(input.read_text("p2").unwrap().as_deref(), Some("two"));
        assert_eq!(input.read_text("p3").unwrap(), None);
        assert_eq!(input.prompts, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_scripted_input_cancelled() {
        let mut input = ScriptedInput::cancelled();
        assert_eq!(input.read_text("p").unwrap(), None);
    }
}
