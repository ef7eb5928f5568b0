//! OpenAI-compatible adapters
//!
//! Both ports are served by one chat-completions client. Replies are
//! requested as JSON objects and decoded into domain types; anything the
//! service does wrong comes back as an opaque `anyhow` error.

mod client;
mod extractor;
mod interpreter;

pub use client::OpenAiClient;
pub use extractor::OpenAiExtractor;
pub use interpreter::OpenAiInterpreter;
