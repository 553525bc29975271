//! Characters exempt from escaping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of characters a codec must pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmuneSet {
    chars: BTreeSet<char>,
}

impl ImmuneSet {
    /// An empty set: every character is subject to the dialect's rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from the characters of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        chars.chars().collect()
    }

    /// Check whether `c` is immune.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Add a character to the set.
    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromIterator<char> for ImmuneSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl From<&[char]> for ImmuneSet {
    fn from(chars: &[char]) -> Self {
        chars.iter().copied().collect()
    }
}
