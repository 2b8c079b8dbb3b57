//! Command aliases
//!
//! Users can invoke commands under shorthand names defined in an INI file:
//!
//! ```ini
//! [aliases]
//! c = copy
//! ls = list
//! ```
//!
//! The table is loaded once at startup and never written by this tool.
//! Targets are not checked against the command set here; a bad target shows
//! up as an unknown command when it is dispatched.
//!
//! # Examples
//!
//! ```
//! use grok_cache::alias::AliasTable;
//!
//! let aliases: AliasTable = [("c", "copy")].into_iter().collect();
//! assert_eq!(aliases.resolve("c"), "copy");
//! assert_eq!(aliases.resolve("list"), "list");
//! ```

pub mod error;

pub use error::{AliasError, Result};

use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Shape of the alias file; everything outside `[aliases]` is ignored
#[derive(Debug, Default, Deserialize)]
struct AliasFile {
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

/// Maps alias → canonical command name (e.g., "c" → "copy")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    /// Create an empty alias table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the `[aliases]` table from an INI file
    ///
    /// A missing file yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns `AliasError::Load` if the file exists but cannot be read or
    /// does not have the expected shape.
    pub fn load(path: &Path) -> Result<Self> {
        let load_err = |source| AliasError::Load {
            path: path.to_path_buf(),
            source,
        };

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini).required(false))
            .build()
            .map_err(load_err)?;

        let file: AliasFile = settings.try_deserialize().map_err(load_err)?;
        let table = Self {
            aliases: file.aliases,
        };

        debug!(path = %path.display(), count = table.len(), "loaded aliases");
        Ok(table)
    }

    /// Resolve an invocation name to a canonical command name
    ///
    /// Returns the input unchanged when no alias exists. Resolution is a
    /// single lookup; an alias naming another alias is not followed.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map_or(name, String::as_str)
    }

    /// Get the canonical name an alias maps to, if it is one
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Iterate over (alias, canonical) pairs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<A, C> FromIterator<(A, C)> for AliasTable
where
    A: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, C)>>(iter: I) -> Self {
        Self {
            aliases: iter
                .into_iter()
                .map(|(alias, canonical)| (alias.into(), canonical.into()))
                .collect(),
        }
    }
}
