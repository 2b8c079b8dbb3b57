//! System clipboard access

use thiserror::Error;
use tracing::debug;

/// Errors from the clipboard collaborator
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be reached or it refused the text (e.g., no display)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Places text on a clipboard
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError::Unavailable` if the clipboard cannot be used.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard, via arboard
///
/// A connection is opened per write; the process is short-lived and usually
/// writes at most once.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        debug!(bytes = text.len(), "copied text to clipboard");
        Ok(())
    }
}
