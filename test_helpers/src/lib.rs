//! Test helpers shared across crates.
//!
//! Provides an in-memory output sink for capturing what a script prints and
//! small text helpers for asserting on captured output.

pub mod output;
pub mod text;
