//! Integration tests for tabsplit
//!
//! Session lifecycle tests run against in-memory collaborators. CLI tests
//! run the real binary; the end-to-end test points it at a mock AI service.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;
