//! Chat message interpretation over chat completions

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::core::models::Assignment;
use crate::core::ports::{AssignmentInterpreter, InterpretRequest};

use super::OpenAiClient;

const INTERPRETATION_PROMPT: &str = "You help split a restaurant bill. You get a message \
    from the user, the receipt items nobody has claimed yet, and the people already on the \
    bill. Reply with a JSON object {\"assignments\": [{\"person\": string, \"item\": string}]}. \
    Use item names exactly as listed. When several people share an item, emit one entry per \
    person. When the message names no listed item, reply with an empty list.";

/// Turns chat messages into assignments with a chat model
#[derive(Debug, Clone)]
pub struct OpenAiInterpreter {
    client: OpenAiClient,
}

impl OpenAiInterpreter {
    /// Create an interpreter on top of a client
    #[must_use]
    pub const fn new(client: OpenAiClient) -> Self {
        Self { client }
    }
}

impl AssignmentInterpreter for OpenAiInterpreter {
    async fn interpret(&self, request: &InterpretRequest) -> anyhow::Result<Vec<Assignment>> {
        let context = json!({
            "message": request.message,
            "unassigned_items": request.unassigned,
            "people": request.people,
        });
        let content = serde_json::to_string(&context).context("encode interpretation request")?;

        let reply = self.client.complete_json(INTERPRETATION_PROMPT, Value::String(content)).await?;
        decode_assignments(reply)
    }
}

#[derive(Deserialize)]
struct WireAssignments {
    #[serde(default)]
    assignments: Vec<Assignment>,
}

pub(crate) fn decode_assignments(reply: Value) -> anyhow::Result<Vec<Assignment>> {
    let wire: WireAssignments =
        serde_json::from_value(reply).context("decode assignments reply")?;
    Ok(wire.assignments)
}
