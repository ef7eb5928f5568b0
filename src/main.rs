//! tabsplit - Split a restaurant bill from a receipt photo by chatting
//! about who had what
//!
//! Reads a receipt photo, lists what was on it, then takes plain-language
//! messages like "Jane and John shared the fries" until everything is
//! assigned, and prints who owes what.

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

mod cli;
mod commands;

/// Main entry point for the tabsplit CLI
#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
