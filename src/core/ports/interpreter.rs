//! Assignment interpreter port
//!
//! Defines the interface for turning a chat message into assignments.

use std::future::Future;

use serde::Serialize;

use super::super::models::{Assignment, LineItem};

/// Everything the interpreter gets to see for one chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretRequest {
    /// The user's message, verbatim
    pub message: String,

    /// Items nobody has claimed yet
    pub unassigned: Vec<LineItem>,

    /// Names of people already on the bill
    pub people: Vec<String>,
}

/// Interprets free-text instructions as person/item assignments
pub trait AssignmentInterpreter: Send + Sync {
    /// Return zero or more assignments for the message
    ///
    /// An empty list is a valid answer and means nothing matched.
    fn interpret(
        &self,
        request: &InterpretRequest,
    ) -> impl Future<Output = anyhow::Result<Vec<Assignment>>> + Send;
}
