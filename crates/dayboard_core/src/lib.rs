//! Core record rules for Dayboard.
//! This crate is the single source of truth for how task, project and label
//! records are validated and sanitized before they reach storage.

pub mod logging;
pub mod model;
pub mod sanitize;
pub mod service;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entity::{EntityKind, UnknownEntityKind};
pub use model::value::{FieldState, Mapping, Number, Value};
pub use sanitize::normalizer::normalize;
pub use service::record_service::{
    normalize_record_json, parse_record_json, prepare_record, prepare_record_json,
    to_json_string, validate_record_json, PrepareError, PrepareResult,
};
pub use validate::{
    messages, validate_label, validate_project, validate_record, validate_task, IssueKind,
    ValidationIssue,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
