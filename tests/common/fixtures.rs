//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use tabsplit::core::models::{Assignment, ExtractedReceipt, LineItem};
use tabsplit::core::services::Ledger;

/// A few bytes that pass for a JPEG
pub const JPEG_BYTES: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

/// Builder for extraction results
pub struct ReceiptBuilder {
    items: Vec<LineItem>,
    tax: f64,
    tip: f64,
}

impl ReceiptBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            tax: 0.0,
            tip: 0.0,
        }
    }

    pub fn item(mut self, name: &str, price: f64) -> Self {
        self.items.push(LineItem::new(name, price));
        self
    }

    pub fn tax(mut self, tax: f64) -> Self {
        self.tax = tax;
        self
    }

    pub fn tip(mut self, tip: f64) -> Self {
        self.tip = tip;
        self
    }

    pub fn build(self) -> ExtractedReceipt {
        ExtractedReceipt {
            items: self.items,
            tax: self.tax,
            tip: self.tip,
        }
    }
}

impl Default for ReceiptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Burger 10, Fries 4, tax 1, tip 2
pub fn burger_and_fries() -> ExtractedReceipt {
    ReceiptBuilder::new().item("Burger", 10.0).item("Fries", 4.0).tax(1.0).tip(2.0).build()
}

/// A ledger loaded from a receipt
pub fn ledger_for(receipt: &ExtractedReceipt) -> Ledger {
    Ledger::from_line_items(&receipt.items)
}

/// Shorthand for an assignment
pub fn assign(person: &str, item: &str) -> Assignment {
    Assignment::new(person, item)
}

/// Compare amounts to the precision a receipt cares about
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}
