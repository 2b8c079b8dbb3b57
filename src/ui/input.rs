//! Statement text input
//!
//! `add` does not take the statement as an argument; the text is read at the
//! point of use through a [`TextSource`], which keeps quoting of multi-line
//! text out of the shell and lets tests script the input.

use std::io::{self, Read};

/// Source of statement text for `add`
///
/// # Examples
///
/// ```no_run
/// use grok_cache::ui::input::{DialoguerInput, TextSource};
///
/// let mut input = DialoguerInput::new();
/// if let Some(text) = input.read_text("Enter cache statement for [greeting].casual").unwrap() {
///     println!("got {text}");
/// }
/// ```
pub trait TextSource {
    /// Read one statement
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the underlying terminal or stream fails.
    fn read_text(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// Interactive prompt using dialoguer
///
/// Empty input is refused and the prompt repeats. Ctrl-C cancels.
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for DialoguerInput {
    fn read_text(&mut self, prompt: &str) -> Result<Option<String>> {
        use dialoguer::Input;

        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(false);

        match input.interact_text() {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(InputError::Io(io::Error::other(e))),
        }
    }
}

/// Reads the whole statement from a stream, for piped stdin
///
/// One trailing line ending is dropped; everything else, including inner
/// newlines, is kept.
pub struct PipedInput<R> {
    reader: R,
}

impl<R: Read> PipedInput<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl PipedInput<io::Stdin> {
    /// Read statements from standard input
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> TextSource for PipedInput<R> {
    fn read_text(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;

        if let Some(stripped) = text.strip_suffix('\n') {
            let len = stripped.strip_suffix('\r').unwrap_or(stripped).len();
            text.truncate(len);
        }

        if text.trim().is_empty() {
            return Err(InputError::Invalid(
                "no statement text on standard input".to_string(),
            ));
        }
        Ok(Some(text))
    }
}
