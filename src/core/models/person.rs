//! Person model
//!
//! People are identified by name. Names arrive from free-form chat, so the
//! same person may show up as `jane`, `Jane` or `JANE`; all three are one
//! person. The first spelling seen is kept for display.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::ItemId;

/// A person's name with case-insensitive identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PersonName {
    display: String,
    key: String,
}

impl PersonName {
    /// Normalize a raw name: trim, then uppercase the first character
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let display = chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        });
        Self {
            key: trimmed.to_lowercase(),
            display,
        }
    }

    /// Name as shown to the user
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Whether the name is blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl PartialEq for PersonName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PersonName {}

impl PartialOrd for PersonName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersonName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Hash for PersonName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<String> for PersonName {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for PersonName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.display
    }
}

/// A person and the items they are responsible for
///
/// Holds item ids only; the ledger owns the items themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Display name
    pub name: PersonName,

    /// Items this person is on, shared or not
    pub items: BTreeSet<ItemId>,
}
