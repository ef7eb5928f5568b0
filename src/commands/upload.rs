//! Receipt upload - read a photo from disk and hand it to the session

use std::fs;
use std::path::Path;

use anyhow::Context;

use tabsplit::core::models::{ImageError, ReceiptImage, media_type_for_path};
use tabsplit::core::ports::{AssignmentInterpreter, ReceiptExtractor};
use tabsplit::output::{ItemsReport, OutputMode};
use tabsplit::session::Session;

/// Read a receipt photo, rejecting files that are not images
pub fn read_receipt(path: &Path) -> anyhow::Result<ReceiptImage> {
    let media_type = media_type_for_path(path);
    if !media_type.starts_with("image/") {
        return Err(ImageError::NotAnImage {
            media_type: media_type.to_string(),
        }
        .into());
    }

    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(ReceiptImage::new(bytes, media_type)?)
}

/// Upload a photo and show what was found
pub async fn upload<E, I>(
    session: &mut Session<E, I>,
    image: ReceiptImage,
    mode: OutputMode,
    currency: &str,
) -> anyhow::Result<()>
where
    E: ReceiptExtractor,
    I: AssignmentInterpreter,
{
    if mode == OutputMode::Human {
        println!("Reading receipt...");
    }
    session.upload_image(image).await?;

    ItemsReport::new(session.ledger(), session.totals()).render(mode, currency);
    if let Some(message) = session.transcript().last() {
        tabsplit::output::render_message(message, mode);
    }
    Ok(())
}
