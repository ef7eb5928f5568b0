//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the bill-splitting logic and
//! the hosted AI service that reads receipts and chat messages.
//!
//! Implementations live in the `adapters` module; tests use in-memory mocks.

mod extractor;
mod interpreter;

pub use extractor::ReceiptExtractor;
pub use interpreter::{AssignmentInterpreter, InterpretRequest};
