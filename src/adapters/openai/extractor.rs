//! Receipt extraction over chat completions

use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::models::{ExtractedReceipt, LineItem, ReceiptImage};
use crate::core::ports::ReceiptExtractor;

use super::OpenAiClient;

const EXTRACTION_PROMPT: &str = "You read restaurant receipts. Reply with a JSON object \
    {\"items\": [{\"name\": string, \"price\": number}], \"tax\": number, \"tip\": number}. \
    List every purchased line with its full line price, quantity already multiplied in. \
    Do not list subtotal, tax, tip, service charge or total lines as items. \
    Use 0 for tax or tip when the receipt shows none.";

/// A quoted amount: optional currency symbol, digits with optional `,`
/// thousands groups, optional cents
static QUOTED_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[$€£¥]?\s*(\d{1,3}(?:,\d{3})+|\d+)(\.\d{1,2})?\s*$")
        .expect("amount pattern is valid")
});

/// Reads receipts with a vision-capable chat model
#[derive(Debug, Clone)]
pub struct OpenAiExtractor {
    client: OpenAiClient,
}

impl OpenAiExtractor {
    /// Create an extractor on top of a client
    #[must_use]
    pub const fn new(client: OpenAiClient) -> Self {
        Self { client }
    }
}

impl ReceiptExtractor for OpenAiExtractor {
    async fn extract(&self, image: &ReceiptImage) -> anyhow::Result<ExtractedReceipt> {
        let data_url = format!("data:{};base64,{}", image.media_type(), BASE64.encode(image.bytes()));
        let content = json!([
            { "type": "text", "text": "Extract the items, tax and tip from this receipt." },
            { "type": "image_url", "image_url": { "url": data_url } },
        ]);

        let reply = self.client.complete_json(EXTRACTION_PROMPT, content).await?;
        decode_receipt(reply)
    }
}

#[derive(Deserialize)]
struct WireReceipt {
    #[serde(default)]
    items: Vec<WireItem>,
    #[serde(default)]
    tax: Option<Amount>,
    #[serde(default)]
    tip: Option<Amount>,
}

#[derive(Deserialize)]
struct WireItem {
    name: String,
    price: Amount,
}

/// Models sometimes quote prices ("$4.50") despite being asked for numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    fn value(&self) -> anyhow::Result<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => {
                let caps = QUOTED_AMOUNT.captures(s).ok_or_else(|| anyhow!("not an amount: {s:?}"))?;
                let whole = caps[1].replace(',', "");
                let cents = caps.get(2).map_or("", |m| m.as_str());
                format!("{whole}{cents}").parse().with_context(|| format!("not an amount: {s:?}"))
            },
        }
    }
}

pub(crate) fn decode_receipt(reply: Value) -> anyhow::Result<ExtractedReceipt> {
    let wire: WireReceipt = serde_json::from_value(reply).context("decode receipt reply")?;

    let items = wire
        .items
        .into_iter()
        .map(|item| Ok(LineItem::new(item.name, item.price.value()?)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let tax = wire.tax.as_ref().map_or(Ok(0.0), Amount::value)?;
    let tip = wire.tip.as_ref().map_or(Ok(0.0), Amount::value)?;

    Ok(ExtractedReceipt { items, tax, tip })
}
