//! Receipt image payload
//!
//! Only the media type is inspected; the bytes go to the extractor as-is.

use std::path::Path;

use thiserror::Error;

/// Errors raised when accepting an upload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// The payload is not an image
    #[error("not an image ({media_type}); please upload a photo of the receipt")]
    NotAnImage {
        /// Media type that was supplied
        media_type: String,
    },

    /// The payload has no bytes
    #[error("image file is empty")]
    Empty,
}

/// An uploaded receipt photo
#[derive(Clone, PartialEq, Eq)]
pub struct ReceiptImage {
    bytes: Vec<u8>,
    media_type: String,
}

impl ReceiptImage {
    /// Accept an upload, rejecting non-image media types and empty payloads
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Result<Self, ImageError> {
        let media_type = media_type.into().trim().to_lowercase();
        if !media_type.starts_with("image/") {
            return Err(ImageError::NotAnImage { media_type });
        }
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        Ok(Self { bytes, media_type })
    }

    /// Raw image bytes
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Media type, e.g. `image/jpeg`
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

impl std::fmt::Debug for ReceiptImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptImage")
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Guess a media type from a file extension
///
/// Unknown extensions map to `application/octet-stream`, which
/// [`ReceiptImage::new`] rejects.
#[must_use]
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "bmp" => "image/bmp",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
