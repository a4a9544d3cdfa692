//! Storage-bound record sanitization.
//!
//! # Responsibility
//! - Turn caller-built records into the shape written to the document store.
//!
//! # Invariants
//! - Sanitization is total: every input produces an output, never an error.
//! - Inputs are borrowed and never mutated; output is a fresh tree.

pub mod normalizer;
