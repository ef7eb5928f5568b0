//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without calling the AI service. State is shared behind an `Arc` so a
//! test can keep a handle after moving the mock into a session.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tabsplit::core::models::{Assignment, ExtractedReceipt, ReceiptImage};
use tabsplit::core::ports::{AssignmentInterpreter, InterpretRequest, ReceiptExtractor};
use tabsplit::session::BusyFlag;

/// Records what a busy flag reads while a mock call is running
#[derive(Clone, Default)]
pub struct BusyRecorder {
    flag: Arc<Mutex<Option<BusyFlag>>>,
    seen: Arc<Mutex<Vec<bool>>>,
}

impl BusyRecorder {
    fn watch(&self, flag: BusyFlag) {
        *self.flag.lock().unwrap() = Some(flag);
    }

    fn record(&self) {
        if let Some(flag) = self.flag.lock().unwrap().as_ref() {
            self.seen.lock().unwrap().push(flag.is_busy());
        }
    }

    fn seen(&self) -> Vec<bool> {
        self.seen.lock().unwrap().clone()
    }
}

/// Mock implementation of ReceiptExtractor
#[derive(Clone)]
pub struct MockExtractor {
    receipt: Option<ExtractedReceipt>,
    hang: bool,
    calls: Arc<AtomicUsize>,
    busy: BusyRecorder,
}

impl MockExtractor {
    /// Always returns this receipt
    pub fn returning(receipt: ExtractedReceipt) -> Self {
        Self {
            receipt: Some(receipt),
            hang: false,
            calls: Arc::new(AtomicUsize::new(0)),
            busy: BusyRecorder::default(),
        }
    }

    /// Always fails
    pub fn failing() -> Self {
        Self {
            receipt: None,
            hang: false,
            calls: Arc::new(AtomicUsize::new(0)),
            busy: BusyRecorder::default(),
        }
    }

    /// Never finishes
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::failing()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Record the flag's state on every call
    pub fn watch(&self, flag: BusyFlag) {
        self.busy.watch(flag);
    }

    /// Flag readings taken during calls
    pub fn busy_during(&self) -> Vec<bool> {
        self.busy.seen()
    }
}

impl ReceiptExtractor for MockExtractor {
    async fn extract(&self, _image: &ReceiptImage) -> anyhow::Result<ExtractedReceipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.busy.record();
        if self.hang {
            std::future::pending::<()>().await;
        }
        self.receipt.clone().ok_or_else(|| anyhow::anyhow!("mock extraction failure"))
    }
}

/// Mock implementation of AssignmentInterpreter
///
/// Replies are consumed in order; once they run out every call returns
/// an empty list.
#[derive(Clone, Default)]
pub struct MockInterpreter {
    replies: Arc<Mutex<VecDeque<Result<Vec<Assignment>, String>>>>,
    requests: Arc<Mutex<Vec<InterpretRequest>>>,
    busy: BusyRecorder,
}

impl MockInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn reply(self, assignments: Vec<Assignment>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(assignments));
        self
    }

    /// Queue a failure
    pub fn fail(self, reason: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(reason.to_string()));
        self
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<InterpretRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Record the flag's state on every call
    pub fn watch(&self, flag: BusyFlag) {
        self.busy.watch(flag);
    }

    /// Flag readings taken during calls
    pub fn busy_during(&self) -> Vec<bool> {
        self.busy.seen()
    }
}

impl AssignmentInterpreter for MockInterpreter {
    async fn interpret(&self, request: &InterpretRequest) -> anyhow::Result<Vec<Assignment>> {
        self.requests.lock().unwrap().push(request.clone());
        self.busy.record();
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Ok(assignments)) => Ok(assignments),
            Some(Err(reason)) => Err(anyhow::anyhow!(reason)),
            None => Ok(Vec::new()),
        }
    }
}
