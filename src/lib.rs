//! tabsplit - Split a restaurant bill from a receipt photo by chatting
//! about who had what
//!
//! This library provides the bill-splitting core: a ledger that reconciles
//! person/item assignments, a calculator for each person's share of
//! subtotal, tax and tip, and a session state machine that drives the
//! receipt reader and message interpreter through port traits.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod session;
