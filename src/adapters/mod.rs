//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that perform I/O:
//!
//! - `openai/` - Receipt extraction and message interpretation over an
//!   OpenAI-compatible chat-completions API (feature `llm`)

#[cfg(feature = "llm")]
pub mod openai;
