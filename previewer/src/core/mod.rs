//! Deterministic, pure logic for building the preview section.
//!
//! Core modules are free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod ordering;
pub mod section;
pub mod splice;
pub mod types;
