//! Receipt extractor port
//!
//! Defines the interface for turning a receipt photo into line items.

use std::future::Future;

use super::super::models::{ExtractedReceipt, ReceiptImage};

/// Reads line items, tax and tip off a receipt image
///
/// Failures are opaque: the session only needs to know that extraction
/// did not work, not why.
pub trait ReceiptExtractor: Send + Sync {
    /// Extract the receipt contents from an image
    fn extract(
        &self,
        image: &ReceiptImage,
    ) -> impl Future<Output = anyhow::Result<ExtractedReceipt>> + Send;
}
