//! Test helpers shared across crates.
//!
//! Provides argv builders for driving option parsers and text helpers for
//! asserting on usage output.

pub mod argv;
pub mod text;
