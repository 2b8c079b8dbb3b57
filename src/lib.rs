//! grok-cache - named text statements, one command away from the clipboard
//!
//! Statements are stored in a TOML file under a section and a key and can be
//! copied, listed, added and deleted. Commands can be invoked under
//! user-defined aliases, resolved before dispatch.

use thiserror::Error;

pub mod alias;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod output;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CacheError {
    /// Store error (including a corrupt cache file)
    #[error(transparent)]
    Store(#[from] store::StoreError),
    /// The alias file could not be loaded
    #[error(transparent)]
    Alias(#[from] alias::AliasError),
    /// Statement input failed
    #[error(transparent)]
    Input(#[from] ui::InputError),
    /// The clipboard could not be used
    #[error(transparent)]
    Clipboard(#[from] ui::ClipboardError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// The invocation name is not a command, even after alias resolution
    #[error("unknown command '{invoked}'{}", alias_note(.invoked, .resolved))]
    UnknownCommand { invoked: String, resolved: String },
    /// Bad command arguments, or a help request, as rendered by clap
    #[error(transparent)]
    Usage(#[from] clap::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CacheError {
    /// Process exit code for this error
    ///
    /// Unknown commands and bad arguments exit with 2, everything else with 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownCommand { .. } => 2,
            Self::Usage(err) => u8::try_from(err.exit_code()).unwrap_or(2),
            _ => 1,
        }
    }
}

fn alias_note(invoked: &str, resolved: &str) -> String {
    if invoked == resolved {
        String::new()
    } else {
        format!(" (alias for '{resolved}')")
    }
}

/// Result type used by command handlers and the dispatcher
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let unknown = CacheError::UnknownCommand {
            invoked: "x".to_string(),
            resolved: "x".to_string(),
        };
        assert_eq!(unknown.exit_code(), 2);

        let corrupt = CacheError::from(store::StoreError::Corrupt {
            path: PathBuf::from("cache.toml"),
            reason: "line 1: bad".to_string(),
        });
        assert_eq!(corrupt.exit_code(), 1);

        let clipboard = CacheError::from(ui::ClipboardError::Unavailable("no display".into()));
        assert_eq!(clipboard.exit_code(), 1);
    }

    #[test]
    fn test_store_errors_keep_their_message() {
        let err = CacheError::from(store::StoreError::Corrupt {
            path: PathBuf::from("/home/me/cache.toml"),
            reason: "line 4: expected `=`".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Cache file /home/me/cache.toml is corrupt: line 4: expected `=`"
        );
    }
}
