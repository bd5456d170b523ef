//! Blocklist of executable names
//!
//! Names are stored lowercased and matched as whole names only.

use std::collections::BTreeSet;

/// Immutable set of lowercase executable names to terminate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    names: BTreeSet<String>,
}

impl Blocklist {
    /// Build a blocklist from raw names
    ///
    /// Entries are trimmed and lowercased. Blank entries are dropped and
    /// duplicates collapse into one.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Check whether a process name is blocked (case-insensitive, exact)
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the blocklist has no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the normalized names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Blocklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
