use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statements of one section, keyed by name
pub type Section = BTreeMap<String, String>;

/// In-memory form of the cache file
///
/// Maps section name → key → statement text. Both levels are ordered
/// lexicographically, so the file is written in the same order no matter
/// how it was built up. A section is never kept once its last key is gone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statements {
    sections: BTreeMap<String, Section>,
}

/// One section as returned by [`Statements::listing`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionListing {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl Statements {
    /// Create an empty set of statements
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the statement stored at `section`/`key`
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Insert or overwrite a statement, returning the text it replaced
    pub fn insert(&mut self, section: &str, key: &str, text: String) -> Option<String> {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), text)
    }

    /// Remove a statement, dropping its section if it was the last key
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        let entries = self.sections.get_mut(section)?;
        let removed = entries.remove(key)?;

        if entries.is_empty() {
            self.sections.remove(section);
        }

        Some(removed)
    }

    /// Get a section by name
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Iterate over sections in stored order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, entries)| (name.as_str(), entries))
    }

    /// Owned snapshot of every section and its entries, in stored order
    #[must_use]
    pub fn listing(&self) -> Vec<SectionListing> {
        self.sections()
            .map(|(name, entries)| SectionListing {
                name: name.to_string(),
                entries: entries
                    .iter()
                    .map(|(key, text)| (key.clone(), text.clone()))
                    .collect(),
            })
            .collect()
    }

    /// Number of sections
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of statements across all sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
