//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for grok-cache using the `clap` crate.
//!
//! Parsing happens in two stages. The top-level [`Cli`] only knows the global
//! flags; the command name and everything after it are captured verbatim as
//! an external subcommand. The dispatcher then resolves the name through the
//! alias table and parses the remaining arguments with the argument struct of
//! the canonical command ([`CopyArgs`], [`ListArgs`], [`AddArgs`],
//! [`DeleteArgs`]). This is what lets arbitrary user-defined names reach the
//! built-in commands.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use grok_cache::cli::{Cli, Invocation};
//!
//! let cli = Cli::parse_from(["grok-cache", "--debug", "c", "greeting", "casual"]);
//! assert!(cli.debug);
//! let Some(Invocation::External(argv)) = cli.command else { panic!() };
//! assert_eq!(argv, ["c", "greeting", "casual"]);
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

const COMMANDS_HELP: &str = "\
Commands:
  copy <SECTION> <KEY>    Copy a cache statement to the clipboard
  list [-l]               List all sections and keys
  add <SECTION> <KEY>     Add or update a cache statement
  delete <SECTION> <KEY>  Delete a cache statement

Any name defined in the [aliases] table of the alias file can be used in
place of a command name, e.g. `c = copy`.";

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(
    name = "grok-cache",
    version,
    about = "Manage cache statements: named snippets of text, copied to the clipboard on demand",
    long_about = None,
    disable_help_subcommand = true,
    subcommand_value_name = "COMMAND",
    after_help = COMMANDS_HELP
)]
pub struct Cli {
    /// Statement file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub cache_file: Option<PathBuf>,

    /// Alias file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub alias_file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Invocation>,
}

/// The command name and its raw arguments, before alias resolution
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Print the top-level help text to stdout
    ///
    /// # Errors
    ///
    /// Returns an I/O error if stdout cannot be written.
    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_help()
    }
}

/// Copy a cache statement to the clipboard
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct CopyArgs {
    /// Section containing the statement
    pub section: String,

    /// Key of the statement within the section
    pub key: String,
}

/// List all cache statements by section
#[derive(Parser, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListArgs {
    /// Also print each statement, wrapped to 80 columns
    #[arg(short = 'l', long = "long")]
    pub long: bool,
}

/// Add or update a cache statement; the text is prompted for
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    /// Section to store the statement in (created if missing)
    pub section: String,

    /// Key of the statement within the section
    pub key: String,
}

/// Delete a cache statement
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    /// Section containing the statement
    pub section: String,

    /// Key of the statement within the section
    pub key: String,
}

/// Parse the arguments of one command
///
/// `invoked_as` is the name the user typed and only affects usage and error
/// text.
///
/// # Errors
///
/// Returns the `clap::Error` for missing, extra or unknown arguments, and for
/// `--help`.
pub fn parse_command_args<T: Parser>(invoked_as: &str, args: &[String]) -> Result<T, clap::Error> {
    let bin_name = format!("grok-cache {invoked_as}");
    T::try_parse_from(std::iter::once(bin_name).chain(args.iter().cloned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_then_external_command() {
        let cli = Cli::try_parse_from([
            "grok-cache",
            "--cache-file",
            "/tmp/c.toml",
            "list",
            "-l",
        ])
        .unwrap();

        assert_eq!(cli.cache_file, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(
            cli.command,
            Some(Invocation::External(strings(&["list", "-l"])))
        );
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::try_parse_from(["grok-cache"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_key_args() {
        let args: CopyArgs = parse_command_args("c", &strings(&["greeting", "casual"])).unwrap();
        assert_eq!(args.section, "greeting");
        assert_eq!(args.key, "casual");
    }

    #[test]
    fn test_parse_list_flag() {
        let args: ListArgs = parse_command_args("list", &strings(&["-l"])).unwrap();
        assert!(args.long);

        let args: ListArgs = parse_command_args("list", &[]).unwrap();
        assert!(!args.long);
    }

    #[test]
    fn test_missing_key_is_usage_error() {
        let err = parse_command_args::<DeleteArgs>("delete", &strings(&["greeting"])).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_argument_is_usage_error() {
        let result = parse_command_args::<AddArgs>("add", &strings(&["a", "b", "c"]));
        assert!(result.is_err());
    }
}
