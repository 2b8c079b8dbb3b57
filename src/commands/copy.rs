//! Copy command - put a statement on the clipboard

use crate::{Result, cli::CopyArgs, store::StoreError};
use colored::Colorize;
use std::io::Write;

use super::{Outcome, Session};

/// Execute the copy command
///
/// Surrounding whitespace is trimmed before the text reaches the clipboard.
///
/// # Errors
///
/// Returns `CacheError` if the store cannot be read, the clipboard is
/// unavailable, or output cannot be written.
pub fn execute(session: &mut Session<'_>, args: &CopyArgs) -> Result<Outcome> {
    let text = match session.store.get(&args.section, &args.key) {
        Ok(text) => text,
        Err(err @ StoreError::NotFound { .. }) => {
            writeln!(session.out, "{err}")?;
            return Ok(Outcome::NotFound);
        }
        Err(err) => return Err(err.into()),
    };

    session.clipboard.set_text(text.trim())?;

    writeln!(
        session.out,
        "{} Copied '{}' from '{}' to clipboard!",
        "✓".green().bold(),
        args.key,
        args.section
    )?;
    Ok(Outcome::Done)
}
