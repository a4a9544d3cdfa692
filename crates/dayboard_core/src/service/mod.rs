//! Core use-case services.
//!
//! # Responsibility
//! - Compose validation and sanitization into the sequence storage callers
//!   run before every write.
//! - Keep FFI/CLI layers free of ordering rules.

pub mod record_service;
