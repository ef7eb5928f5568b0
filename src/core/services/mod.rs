//! Business logic services
//!
//! Pure logic that operates on domain models. No I/O: data in, results out.
//!
//! - [`ledger`] - Reconcile assignments with receipt items
//! - [`summary`] - Compute each person's share of the bill

pub mod ledger;
pub mod summary;

pub use ledger::{AcceptedAssignment, Ledger, LedgerError, Reconciliation, Unassignment};
pub use summary::{PersonShare, summarize};
