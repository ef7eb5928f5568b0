//! Core domain logic for tabsplit
//!
//! This module contains pure business logic with no I/O dependencies.
//! The AI service is reached only through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ReceiptItem`, `PersonName`, `Assignment`, `ExtractedReceipt`)
//! - `services/` - Reconciliation and summary logic
//! - `ports/` - Trait definitions for the extraction and interpretation collaborators

pub mod models;
pub mod ports;
pub mod services;
