//! Record domain model shared by sanitization and validation.
//!
//! # Responsibility
//! - Define the generic value tree every record is expressed in.
//! - Name the entity kinds the core knows how to validate.
//!
//! # Invariants
//! - Absent and explicitly cleared fields stay distinct end to end.
//! - Core never mutates caller-owned records.

pub mod entity;
pub mod value;
