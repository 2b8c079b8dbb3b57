//! List command - show sections and keys, optionally with statement text

use crate::{Result, cli::ListArgs, output, store::SectionListing};
use std::io::Write;

use super::{Outcome, Session};

/// Execute the list command
///
/// # Errors
///
/// Returns `CacheError` if the store cannot be read or output cannot be written.
pub fn execute(session: &mut Session<'_>, args: &ListArgs) -> Result<Outcome> {
    let sections = session.store.list()?;

    if sections.is_empty() {
        writeln!(session.out, "No cache statements found.")?;
        return Ok(Outcome::Done);
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(session.out)?;
        }
        write_section(session.out, section, args.long)?;
    }
    Ok(Outcome::Done)
}

fn write_section(out: &mut dyn Write, section: &SectionListing, long: bool) -> Result<()> {
    writeln!(out, "{}", output::section_header(&section.name))?;

    for (key, text) in &section.entries {
        if long {
            writeln!(out, "{}", output::long_key_line(key))?;
            for line in output::statement_lines(text) {
                writeln!(out, "{line}")?;
            }
        } else {
            writeln!(out, "{}", output::key_line(key))?;
        }
    }
    Ok(())
}
