//! Delete command - remove a statement

use crate::{Result, cli::DeleteArgs, store::StoreError};
use colored::Colorize;
use std::io::Write;

use super::{Outcome, Session};

/// Execute the delete command
///
/// Removing the last key of a section removes the section as well.
///
/// # Errors
///
/// Returns `CacheError` if the store cannot be read or written.
pub fn execute(session: &mut Session<'_>, args: &DeleteArgs) -> Result<Outcome> {
    if !session.store.exists() {
        writeln!(session.out, "No cache file found.")?;
        return Ok(Outcome::NotFound);
    }

    match session.store.delete(&args.section, &args.key) {
        Ok(_) => {
            writeln!(
                session.out,
                "{} Deleted '{}' from '{}'.",
                "✓".green().bold(),
                args.key,
                args.section
            )?;
            Ok(Outcome::Done)
        }
        Err(err @ StoreError::NotFound { .. }) => {
            writeln!(session.out, "{err}")?;
            Ok(Outcome::NotFound)
        }
        Err(err) => Err(err.into()),
    }
}
