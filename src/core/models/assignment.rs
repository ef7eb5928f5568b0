//! Assignment model
//!
//! "This person had this item." Produced by the interpreter and consumed
//! straight away by the ledger; never stored.

use serde::{Deserialize, Serialize};

/// A claim that a named person is responsible for a named item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Person name as the interpreter produced it
    pub person: String,

    /// Item name, matched case-insensitively against the receipt
    pub item: String,
}

impl Assignment {
    /// Create a new assignment
    #[must_use]
    pub fn new(person: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            item: item.into(),
        }
    }
}
