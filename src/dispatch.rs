//! Command dispatch
//!
//! Turns an invocation name plus raw arguments into a run of one canonical
//! command: the name goes through the alias table, the result is looked up in
//! the fixed command registry, and the arguments are parsed for that command.

use tracing::debug;

use crate::alias::AliasTable;
use crate::cli::{AddArgs, CopyArgs, DeleteArgs, ListArgs, parse_command_args};
use crate::commands::{self, Outcome, Session};
use crate::{CacheError, Result};

/// The built-in commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalCommand {
    Copy,
    List,
    Add,
    Delete,
}

impl CanonicalCommand {
    /// Every canonical command, in help order
    pub const ALL: [Self; 4] = [Self::Copy, Self::List, Self::Add, Self::Delete];

    /// Look up a canonical command by exact name
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "copy" => Some(Self::Copy),
            "list" => Some(Self::List),
            "add" => Some(Self::Add),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::List => "list",
            Self::Add => "add",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for CanonicalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A canonical command with its parsed arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Copy(CopyArgs),
    List(ListArgs),
    Add(AddArgs),
    Delete(DeleteArgs),
}

impl Command {
    /// Parse `args` as the arguments of `command`
    ///
    /// # Errors
    ///
    /// Returns the `clap::Error` describing the bad arguments (or help text).
    pub fn parse(
        command: CanonicalCommand,
        invoked_as: &str,
        args: &[String],
    ) -> std::result::Result<Self, clap::Error> {
        Ok(match command {
            CanonicalCommand::Copy => Self::Copy(parse_command_args(invoked_as, args)?),
            CanonicalCommand::List => Self::List(parse_command_args(invoked_as, args)?),
            CanonicalCommand::Add => Self::Add(parse_command_args(invoked_as, args)?),
            CanonicalCommand::Delete => Self::Delete(parse_command_args(invoked_as, args)?),
        })
    }

    /// Which canonical command this is
    #[must_use]
    pub const fn canonical(&self) -> CanonicalCommand {
        match self {
            Self::Copy(_) => CanonicalCommand::Copy,
            Self::List(_) => CanonicalCommand::List,
            Self::Add(_) => CanonicalCommand::Add,
            Self::Delete(_) => CanonicalCommand::Delete,
        }
    }

    /// Run the command against a session
    ///
    /// # Errors
    ///
    /// Returns whatever error the command handler reports.
    pub fn execute(&self, session: &mut Session<'_>) -> Result<Outcome> {
        match self {
            Self::Copy(args) => commands::copy(session, args),
            Self::List(args) => commands::list(session, args),
            Self::Add(args) => commands::add(session, args),
            Self::Delete(args) => commands::delete(session, args),
        }
    }
}

/// Resolves invocation names and runs the matching command
pub struct Dispatcher<'a> {
    aliases: &'a AliasTable,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub const fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    /// Map an invocation name to a canonical command
    ///
    /// # Errors
    ///
    /// Returns `CacheError::UnknownCommand` if the name, after alias
    /// resolution, is not a canonical command.
    pub fn resolve(&self, invoked: &str) -> Result<CanonicalCommand> {
        let resolved = self.aliases.resolve(invoked);

        CanonicalCommand::lookup(resolved).ok_or_else(|| CacheError::UnknownCommand {
            invoked: invoked.to_string(),
            resolved: resolved.to_string(),
        })
    }

    /// Resolve, parse and execute one invocation
    ///
    /// # Errors
    ///
    /// Returns `CacheError::UnknownCommand` for unresolvable names,
    /// `CacheError::Usage` for bad arguments, or the handler's error.
    pub fn dispatch(
        &self,
        invoked: &str,
        args: &[String],
        session: &mut Session<'_>,
    ) -> Result<Outcome> {
        let canonical = self.resolve(invoked)?;
        debug!(invoked, %canonical, ?args, "dispatching command");

        let command = Command::parse(canonical, invoked, args)?;
        let outcome = command.execute(session)?;

        debug!(%canonical, ?outcome, "command finished");
        Ok(outcome)
    }
}
