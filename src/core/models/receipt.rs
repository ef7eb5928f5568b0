//! Extracted receipt data
//!
//! What the extractor hands back: priced lines plus the tax and tip totals.
//! The data is checked once here before it becomes session state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors in an extraction result
#[derive(Debug, Error, PartialEq)]
pub enum ReceiptError {
    /// No line items were found
    #[error("receipt has no items")]
    NoItems,

    /// An item has a blank name
    #[error("item {index} has no name")]
    BlankName {
        /// Zero-based position in the extraction result
        index: usize,
    },

    /// An item price is negative, NaN or infinite
    #[error("item {name:?} has an invalid price: {price}")]
    InvalidPrice {
        /// Item name
        name: String,
        /// Offending price
        price: f64,
    },

    /// Tax or tip is negative, NaN or infinite
    #[error("invalid {field}: {value}")]
    InvalidTotal {
        /// "tax" or "tip"
        field: &'static str,
        /// Offending value
        value: f64,
    },
}

/// One priced line as read off the receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name
    pub name: String,
    /// Item price
    pub price: f64,
}

impl LineItem {
    /// Create a line item
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Tax and tip for the whole bill
///
/// Set once at extraction and never edited afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BillTotals {
    /// Total tax
    pub tax: f64,
    /// Total tip
    pub tip: f64,
}

/// Result of reading a receipt image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedReceipt {
    /// Line items in receipt order
    pub items: Vec<LineItem>,
    /// Total tax
    #[serde(default)]
    pub tax: f64,
    /// Total tip
    #[serde(default)]
    pub tip: f64,
}

impl ExtractedReceipt {
    /// Bill-level totals
    #[must_use]
    pub const fn totals(&self) -> BillTotals {
        BillTotals {
            tax: self.tax,
            tip: self.tip,
        }
    }

    /// Check the extraction result before it is loaded into a session
    pub fn validate(&self) -> Result<(), ReceiptError> {
        if self.items.is_empty() {
            return Err(ReceiptError::NoItems);
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(ReceiptError::BlankName { index });
            }
            if !is_valid_amount(item.price) {
                return Err(ReceiptError::InvalidPrice {
                    name: item.name.clone(),
                    price: item.price,
                });
            }
        }

        for (field, value) in [("tax", self.tax), ("tip", self.tip)] {
            if !is_valid_amount(value) {
                return Err(ReceiptError::InvalidTotal { field, value });
            }
        }

        Ok(())
    }
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
