//! Add command - prompt for a statement and store it

use crate::{Result, cli::AddArgs};
use colored::Colorize;
use std::io::Write;

use super::{Outcome, Session};

/// Execute the add command
///
/// The store is read before prompting so a corrupt file fails before any
/// text is typed. The statement text is then read from the session's text
/// source and written to `section`/`key`, replacing any existing statement
/// there.
///
/// # Errors
///
/// Returns `CacheError` if input fails, the names are invalid, or the store
/// cannot be written.
pub fn execute(session: &mut Session<'_>, args: &AddArgs) -> Result<Outcome> {
    session.store.load()?;

    let prompt = format!("Enter cache statement for [{}].{}", args.section, args.key);

    let Some(text) = session.input.read_text(&prompt)? else {
        writeln!(session.out, "Cancelled.")?;
        return Ok(Outcome::Cancelled);
    };

    session.store.put(&args.section, &args.key, text)?;

    writeln!(
        session.out,
        "{} Added/Updated '{}' in '{}'.",
        "✓".green().bold(),
        args.key,
        args.section
    )?;
    Ok(Outcome::Done)
}
