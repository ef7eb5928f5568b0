//! Bill-splitting session
//!
//! Drives one receipt from upload to split:
//!
//! ```text
//! Welcome --upload--> Parsing --ok--> Splitting
//!                        |
//!                        +--failure--> Error
//!
//! reset: any phase --> Welcome
//! ```
//!
//! While splitting, chat messages go to the interpreter and the resulting
//! assignments are applied to the ledger. Interpreter failures are reported
//! in the transcript and never change the phase.

mod busy;
mod transcript;

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;

use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::core::models::{
    BillTotals, ImageError, ItemId, LineItem, PersonName, ReceiptImage, ReceiptItem,
};
use crate::core::ports::{AssignmentInterpreter, InterpretRequest, ReceiptExtractor};
use crate::core::services::{Ledger, LedgerError, PersonShare, Reconciliation, Unassignment, summarize};

pub use busy::BusyFlag;
pub use transcript::{ChatMessage, Role, Transcript};

/// Shown when a receipt could not be read
pub const EXTRACTION_FAILED: &str =
    "Sorry, I couldn't read that receipt. Please try again with a clearer image.";

/// Shown when a chat message could not be interpreted
pub const INTERPRETATION_FAILED: &str =
    "Sorry, I couldn't work out who had what from that. Could you rephrase?";

/// Shown when a chat message matched no unassigned item
pub const NOTHING_ASSIGNED: &str = "I couldn't match that to any unassigned items. \
                                    Try naming the items as they appear on the receipt.";

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No receipt loaded
    #[default]
    Welcome,
    /// Waiting for the extractor
    Parsing,
    /// Items loaded, accepting chat messages
    Splitting,
    /// Extraction failed; only `reset` leaves this phase
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => write!(f, "welcome"),
            Self::Parsing => write!(f, "parsing"),
            Self::Splitting => write!(f, "splitting"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Errors returned by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operation is not allowed in the current phase
    #[error("cannot do that while in the {actual} phase (needs {expected})")]
    WrongPhase {
        /// Phase the operation needs
        expected: Phase,
        /// Phase the session is in
        actual: Phase,
    },

    /// The upload was rejected before reaching the extractor
    #[error(transparent)]
    InvalidImage(#[from] ImageError),

    /// The chat message was blank
    #[error("message is empty")]
    EmptyMessage,

    /// The extractor failed or returned unusable data
    #[error("{}", EXTRACTION_FAILED)]
    ExtractionFailed,

    /// A ledger operation was rejected
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// What happened to a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// At least one item was assigned
    Assigned(Reconciliation),
    /// The interpreter answered but nothing matched
    NothingAssigned,
    /// The interpreter failed; the user was asked to rephrase
    Failed,
}

/// Holds the parsing phase for the duration of an extraction
///
/// Falls back to welcome on drop, so an upload whose future is dropped
/// mid-extraction leaves the session ready for another upload. Completed
/// extractions move the phase on after the guard is gone.
struct ParsingGuard<'a> {
    phase: &'a mut Phase,
}

impl<'a> ParsingGuard<'a> {
    fn enter(phase: &'a mut Phase) -> Self {
        *phase = Phase::Parsing;
        Self { phase }
    }
}

impl Drop for ParsingGuard<'_> {
    fn drop(&mut self) {
        *self.phase = Phase::Welcome;
    }
}

/// One bill being split
#[derive(Debug)]
pub struct Session<E, I> {
    extractor: E,
    interpreter: I,
    phase: Phase,
    ledger: Ledger,
    totals: BillTotals,
    transcript: Transcript,
    busy: BusyFlag,
    error: Option<String>,
}

impl<E, I> Session<E, I>
where
    E: ReceiptExtractor,
    I: AssignmentInterpreter,
{
    /// Create a session in the welcome phase
    pub fn new(extractor: E, interpreter: I) -> Self {
        Self {
            extractor,
            interpreter,
            phase: Phase::Welcome,
            ledger: Ledger::default(),
            totals: BillTotals::default(),
            transcript: Transcript::default(),
            busy: BusyFlag::default(),
            error: None,
        }
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Handle for watching the busy flag
    #[must_use]
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Items, people and assignments
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// All receipt items in order
    #[must_use]
    pub fn items(&self) -> Vec<&ReceiptItem> {
        self.ledger.items().collect()
    }

    /// Tax and tip read off the receipt
    #[must_use]
    pub const fn totals(&self) -> BillTotals {
        self.totals
    }

    /// Chat transcript
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// User-facing error message, set in the error phase
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Each person's share, recomputed from current state
    #[must_use]
    pub fn summary(&self) -> BTreeMap<PersonName, PersonShare> {
        summarize(&self.ledger, self.totals)
    }

    /// Upload a receipt photo and extract its items
    ///
    /// Non-image payloads are rejected before the extractor is called and
    /// leave the session in the welcome phase. An extractor failure moves
    /// the session to the error phase.
    pub async fn upload(&mut self, bytes: Vec<u8>, media_type: &str) -> Result<(), SessionError> {
        self.expect_phase(Phase::Welcome)?;
        let image = ReceiptImage::new(bytes, media_type)?;
        self.upload_image(image).await
    }

    /// Upload an already-validated receipt photo
    pub async fn upload_image(&mut self, image: ReceiptImage) -> Result<(), SessionError> {
        self.expect_phase(Phase::Welcome)?;
        let _busy = self.busy.hold();

        info!("Reading receipt ({})", image.media_type());
        let extracted = {
            let _parsing = ParsingGuard::enter(&mut self.phase);
            self.extractor.extract(&image).await
        };

        let receipt = match extracted {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!("Receipt extraction failed: {e:#}");
                return Err(self.fail_extraction());
            },
        };

        if let Err(e) = receipt.validate() {
            warn!("Receipt extraction returned unusable data: {e}");
            return Err(self.fail_extraction());
        }

        self.load(&receipt.items, receipt.totals());
        Ok(())
    }

    /// Interpret a chat message and apply the resulting assignments
    pub async fn send(&mut self, message: &str) -> Result<Reply, SessionError> {
        self.expect_phase(Phase::Splitting)?;
        let text = message.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        let _busy = self.busy.hold();

        self.transcript.push(Role::User, text);
        let request = InterpretRequest {
            message: text.to_string(),
            unassigned: self
                .ledger
                .unassigned_items()
                .map(|item| LineItem::new(item.name.clone(), item.price))
                .collect(),
            people: self.ledger.person_names(),
        };

        let assignments = match self.interpreter.interpret(&request).await {
            Ok(assignments) => assignments,
            Err(e) => {
                warn!("Message interpretation failed: {e:#}");
                self.transcript.push(Role::Assistant, INTERPRETATION_FAILED);
                return Ok(Reply::Failed);
            },
        };

        let outcome = self.ledger.apply(&assignments);
        if outcome.is_empty() {
            info!("No assignments matched ({} proposed)", assignments.len());
            self.transcript.push(Role::Assistant, NOTHING_ASSIGNED);
            return Ok(Reply::NothingAssigned);
        }

        info!("Applied {} assignment(s)", outcome.accepted.len());
        let text = self.describe(&outcome);
        self.transcript.push(Role::Assistant, text);
        Ok(Reply::Assigned(outcome))
    }

    /// Take one person off one item
    pub fn unassign(&mut self, person: &str, item: ItemId) -> Result<Unassignment, SessionError> {
        self.expect_phase(Phase::Splitting)?;
        let outcome = self.ledger.unassign(person, item)?;

        let item_name = self.ledger.item(item).map_or("that item", |i| i.name.as_str());
        let mut text = format!("Removed {} from {item_name}.", outcome.person);
        if outcome.person_removed {
            let _ = write!(text, " {} has nothing left on the bill.", outcome.person);
        }
        self.transcript.push(Role::Assistant, text);
        Ok(outcome)
    }

    /// Clear everything and go back to the welcome phase
    pub fn reset(&mut self) {
        info!("Resetting session from {} phase", self.phase);
        self.phase = Phase::Welcome;
        self.ledger = Ledger::default();
        self.totals = BillTotals::default();
        self.transcript.clear();
        self.error = None;
    }

    fn load(&mut self, lines: &[LineItem], totals: BillTotals) {
        self.ledger = Ledger::from_line_items(lines);
        self.totals = totals;
        self.phase = Phase::Splitting;
        info!("Loaded {} item(s), tax {:.2}, tip {:.2}", lines.len(), totals.tax, totals.tip);

        self.transcript.push(
            Role::Assistant,
            format!(
                "I found {} item(s) on your receipt. Tell me who had what, \
                 e.g. \"David had the burger, Jane and John shared the fries\".",
                lines.len()
            ),
        );
    }

    fn fail_extraction(&mut self) -> SessionError {
        self.phase = Phase::Error;
        self.error = Some(EXTRACTION_FAILED.to_string());
        SessionError::ExtractionFailed
    }

    fn describe(&self, outcome: &Reconciliation) -> String {
        let mut by_item: BTreeMap<ItemId, (&str, Vec<&str>)> = BTreeMap::new();
        for accepted in &outcome.accepted {
            by_item
                .entry(accepted.item)
                .or_insert_with(|| (accepted.item_name.as_str(), Vec::new()))
                .1
                .push(accepted.person.as_str());
        }

        let parts: Vec<String> = by_item
            .values()
            .map(|(item, people)| format!("{item} → {}", people.join(", ")))
            .collect();

        let mut text = format!("Assigned {}.", parts.join("; "));
        if self.ledger.is_fully_assigned() {
            text.push_str(" Everything on the receipt is now assigned.");
        }
        text
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}
