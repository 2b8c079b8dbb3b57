//! Persistent storage for cache statements
//!
//! Statements live in a single TOML file, one table per section:
//!
//! ```toml
//! [greeting]
//! casual = "hey there"
//! formal = "Good day."
//! ```
//!
//! Every mutation reads the whole file, changes one entry and writes the whole
//! file back. There is no locking and no atomic replace: two invocations
//! racing on the same file can lose a write, and an interrupted write can
//! leave the file truncated.
//!
//! # Examples
//!
//! ```no_run
//! use grok_cache::store::Store;
//!
//! let store = Store::new("cache.toml");
//! store.put("greeting", "casual", "hey there".to_string())?;
//! assert_eq!(store.get("greeting", "casual")?, "hey there");
//! store.delete("greeting", "casual")?;
//! # Ok::<(), grok_cache::store::StoreError>(())
//! ```

pub mod error;
pub mod types;

pub use error::{Result, StoreError};
pub use types::{Section, SectionListing, Statements};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed statement store
///
/// Holds only the path; every operation loads the file fresh.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the storage path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the cache file has been created yet
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all statements
    ///
    /// Returns empty `Statements` if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the file does not parse as a table of
    /// string tables, or `StoreError::Io` if it cannot be read.
    pub fn load(&self) -> Result<Statements> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "cache file missing, starting empty");
            return Ok(Statements::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let statements: Statements =
            toml::from_str(&contents).map_err(|e| self.corrupt(&contents, &e))?;

        debug!(
            path = %self.path.display(),
            sections = statements.section_count(),
            statements = statements.len(),
            "loaded cache file"
        );
        Ok(statements)
    }

    /// Write all statements, replacing the file
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory or file cannot be written.
    pub fn save(&self, statements: &Statements) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(statements)?;
        fs::write(&self.path, toml)?;

        debug!(
            path = %self.path.display(),
            sections = statements.section_count(),
            "wrote cache file"
        );
        Ok(())
    }

    /// Get the statement at `section`/`key`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the section or key is absent, or any
    /// error from [`Store::load`].
    pub fn get(&self, section: &str, key: &str) -> Result<String> {
        let statements = self.load()?;
        statements
            .get(section, key)
            .map(str::to_string)
            .ok_or_else(|| not_found(section, key))
    }

    /// Insert or overwrite the statement at `section`/`key`
    ///
    /// Returns the text that was replaced, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidName` for an empty section or key, or any
    /// error from loading or saving the file.
    pub fn put(&self, section: &str, key: &str, text: String) -> Result<Option<String>> {
        validate_name("section", section)?;
        validate_name("key", key)?;

        let mut statements = self.load()?;
        let previous = statements.insert(section, key, text);
        self.save(&statements)?;

        Ok(previous)
    }

    /// Delete the statement at `section`/`key`, returning its text
    ///
    /// The section is removed too when this was its last key. Nothing is
    /// written when the statement does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the section or key is absent, or any
    /// error from loading or saving the file.
    pub fn delete(&self, section: &str, key: &str) -> Result<String> {
        let mut statements = self.load()?;
        let removed = statements
            .remove(section, key)
            .ok_or_else(|| not_found(section, key))?;

        self.save(&statements)?;
        Ok(removed)
    }

    /// List every section with its entries, in stored order
    ///
    /// # Errors
    ///
    /// Returns any error from [`Store::load`].
    pub fn list(&self) -> Result<Vec<SectionListing>> {
        Ok(self.load()?.listing())
    }

    fn corrupt(&self, contents: &str, err: &toml::de::Error) -> StoreError {
        let reason = match err.span() {
            Some(span) => {
                let line = contents[..span.start.min(contents.len())]
                    .matches('\n')
                    .count()
                    + 1;
                format!("line {line}: {}", err.message())
            }
            None => err.message().to_string(),
        };

        StoreError::Corrupt {
            path: self.path.clone(),
            reason,
        }
    }
}

fn not_found(section: &str, key: &str) -> StoreError {
    StoreError::NotFound {
        section: section.to_string(),
        key: key.to_string(),
    }
}

fn validate_name(kind: &'static str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StoreError::InvalidName {
            kind,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (Store, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("cache.toml"));
        (store, temp_dir)
    }

    #[test]
    fn test_load_nonexistent_is_empty() {
        let (store, _dir) = temp_store();
        assert!(!store.exists());
        assert!(store.load().unwrap().is_empty());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let (store, _dir) = temp_store();
        let texts = [
            "hey there",
            "line one\nline two\n\n  indented line",
            "ünïcödé ✓ 日本語 \"quoted\" 'single' \\backslash",
            "",
        ];

        for (i, text) in texts.iter().enumerate() {
            let key = format!("k{i}");
            store.put("section", &key, (*text).to_string()).unwrap();
            assert_eq!(store.get("section", &key).unwrap(), *text);
        }
    }

    #[test]
    fn test_put_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("nested/dir/cache.toml"));

        store.put("greeting", "casual", "hi".to_string()).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_overwrite_leaves_one_entry() {
        let (store, _dir) = temp_store();
        store.put("greeting", "casual", "v1".to_string()).unwrap();
        store.put("greeting", "formal", "Good day.".to_string()).unwrap();

        let previous = store.put("greeting", "casual", "v2".to_string()).unwrap();
        assert_eq!(previous.as_deref(), Some("v1"));

        let listing = store.list().unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(
            listing[0].entries,
            vec![
                ("casual".to_string(), "v2".to_string()),
                ("formal".to_string(), "Good day.".to_string())
            ]
        );
    }

    #[test]
    fn test_delete_last_key_removes_section() {
        let (store, _dir) = temp_store();
        store.put("greeting", "casual", "hi".to_string()).unwrap();

        assert_eq!(store.delete("greeting", "casual").unwrap(), "hi");
        assert!(store.list().unwrap().is_empty());

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(!content.contains("[greeting]"));
    }

    #[test]
    fn test_miss_does_not_touch_file() {
        let (store, _dir) = temp_store();
        store.put("greeting", "casual", "hi".to_string()).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        assert!(store.get("greeting", "formal").unwrap_err().is_not_found());
        assert!(store.get("other", "casual").unwrap_err().is_not_found());
        assert!(store.delete("greeting", "formal").unwrap_err().is_not_found());
        assert!(store.delete("other", "casual").unwrap_err().is_not_found());

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_delete_on_missing_file_does_not_create_it() {
        let (store, _dir) = temp_store();
        assert!(store.delete("greeting", "casual").unwrap_err().is_not_found());
        assert!(!store.exists());
    }

    #[test]
    fn test_empty_names_rejected() {
        let (store, _dir) = temp_store();
        let err = store.put("", "key", "text".to_string()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidName { kind: "section", .. }));

        let err = store.put("section", "  ", "text".to_string()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidName { kind: "key", .. }));
        assert!(!store.exists());
    }

    #[test]
    fn test_corrupt_file_reports_path_and_line() {
        let (store, _dir) = temp_store();
        fs::write(store.path(), "[greeting]\ncasual = \"hi\"\nbroken line\n").unwrap();

        let err = store.load().unwrap_err();
        match &err {
            StoreError::Corrupt { path, reason } => {
                assert_eq!(path, store.path());
                assert!(reason.starts_with("line 3"), "unexpected reason: {reason}");
            }
            other => panic!("expected Corrupt, got {other:?}"),
        }

        // A corrupt file is never rewritten
        assert!(store.put("greeting", "formal", "x".to_string()).is_err());
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("broken line"));
    }

    #[test]
    fn test_reads_hand_written_file() {
        let (store, _dir) = temp_store();
        fs::write(
            store.path(),
            "[greeting]\nformal = \"Good day.\"\ncasual = \"hey there\"\n\n[notes]\nlong = '''\nfirst\nsecond'''\n",
        )
        .unwrap();

        assert_eq!(store.get("greeting", "casual").unwrap(), "hey there");
        assert_eq!(store.get("notes", "long").unwrap(), "first\nsecond");
    }
}
