//! Domain models for tabsplit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ReceiptItem`] - A priced line and who is on it
//! - [`PersonName`] / [`Person`] - Who pays, keyed case-insensitively
//! - [`Assignment`] - "This person had this item"
//! - [`ExtractedReceipt`] / [`BillTotals`] - What the extractor read
//! - [`ReceiptImage`] - An uploaded photo

mod assignment;
mod image;
mod item;
mod person;
mod receipt;

pub use assignment::Assignment;
pub use image::{ImageError, ReceiptImage, media_type_for_path};
pub use item::{ItemId, ReceiptItem};
pub use person::{Person, PersonName};
pub use receipt::{BillTotals, ExtractedReceipt, LineItem, ReceiptError};
