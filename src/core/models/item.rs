//! Receipt item model
//!
//! An item is one priced line on the receipt. Items are created once at
//! extraction time and only the ledger changes who they are assigned to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PersonName;

/// Identifier of a receipt item, stable for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('#')
            .parse::<u32>()
            .map(Self)
            .map_err(|_| format!("Invalid item id: {s}. Use the number shown in the item list"))
    }
}

/// A single line item on the receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    /// Session-stable identifier
    pub id: ItemId,

    /// Name as printed on the receipt
    pub name: String,

    /// Full price of the line (never split here)
    pub price: f64,

    /// People responsible for this item, without duplicates
    pub assigned_to: Vec<PersonName>,
}

impl ReceiptItem {
    /// Create an unassigned item
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            assigned_to: Vec::new(),
        }
    }

    /// Whether nobody has claimed this item yet
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.is_empty()
    }

    /// Case-insensitive exact name comparison
    #[must_use]
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Whether the given person is on this item
    #[must_use]
    pub fn is_assigned_to(&self, person: &PersonName) -> bool {
        self.assigned_to.contains(person)
    }

    /// The slice of the price owed by each assignee
    ///
    /// Returns `None` for an unassigned item.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self) -> Option<f64> {
        if self.assigned_to.is_empty() {
            None
        } else {
            Some(self.price / self.assigned_to.len() as f64)
        }
    }

    pub(crate) fn add_assignee(&mut self, person: &PersonName) -> bool {
        if self.is_assigned_to(person) {
            false
        } else {
            self.assigned_to.push(person.clone());
            true
        }
    }

    pub(crate) fn remove_assignee(&mut self, person: &PersonName) -> bool {
        let before = self.assigned_to.len();
        self.assigned_to.retain(|p| p != person);
        self.assigned_to.len() != before
    }
}
