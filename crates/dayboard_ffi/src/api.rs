//! FFI use-case API for app-facing calls.
//!
//! # Responsibility
//! - Expose record validation and sanitization to the mobile app via FRB.
//! - Exchange records as JSON text so the host keeps its own model types.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Validation messages are passed through verbatim for display.

use dayboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, messages,
    normalize_record_json, ping as ping_inner, prepare_record_json, validate_record_json,
    EntityKind, PrepareError,
};
use log::warn;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Record envelope returned by normalize/prepare calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordResponse {
    /// Whether the record was accepted.
    pub ok: bool,
    /// Normalized record JSON when `ok`.
    pub json: Option<String>,
    /// Validation messages when the record was rejected.
    pub errors: Vec<String>,
    /// Human-readable diagnostics.
    pub message: String,
}

impl RecordResponse {
    fn success(json: String) -> Self {
        Self {
            ok: true,
            json: Some(json),
            errors: Vec::new(),
            message: "Record ready.".to_string(),
        }
    }

    fn failure(operation: &str, err: &PrepareError) -> Self {
        Self {
            ok: false,
            json: None,
            errors: messages(err.issues()),
            message: format!("{operation} failed: {err}"),
        }
    }
}

/// Validation envelope for form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResponse {
    /// `true` only when no rule failed and input parsed.
    pub ok: bool,
    /// Verbatim messages in rule order.
    pub errors: Vec<String>,
    pub message: String,
}

/// Normalizes record JSON for storage without validating it.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; malformed JSON yields `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn normalize_record(json: String) -> RecordResponse {
    match normalize_record_json(json.as_str()) {
        Ok(normalized) => RecordResponse::success(normalized),
        Err(err) => RecordResponse::failure("normalize_record", &err),
    }
}

/// Validates record JSON as `kind` (`task|project|label`).
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; unknown kind or malformed JSON yields `ok=false` with an
///   empty `errors` list and the reason in `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_record(kind: String, json: String) -> ValidationResponse {
    let kind = match kind.parse::<EntityKind>() {
        Ok(kind) => kind,
        Err(err) => return validation_failure(err.to_string()),
    };

    match validate_record_json(kind, json.as_str()) {
        Ok(issues) if issues.is_empty() => ValidationResponse {
            ok: true,
            errors: Vec::new(),
            message: format!("{kind} is valid."),
        },
        Ok(issues) => ValidationResponse {
            ok: false,
            errors: messages(&issues),
            message: format!("{kind} has {} issue(s).", issues.len()),
        },
        Err(err) => validation_failure(format!("validate_record failed: {err}")),
    }
}

/// Validates then normalizes record JSON as `kind`.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; rejected records carry their messages in `errors`.
#[flutter_rust_bridge::frb(sync)]
pub fn prepare_record(kind: String, json: String) -> RecordResponse {
    let kind = match kind.parse::<EntityKind>() {
        Ok(kind) => kind,
        Err(err) => {
            warn!("event=ffi_prepare module=ffi status=error error_code=unknown_kind");
            return RecordResponse {
                ok: false,
                json: None,
                errors: Vec::new(),
                message: format!("prepare_record failed: {err}"),
            };
        }
    };

    match prepare_record_json(kind, json.as_str()) {
        Ok(prepared) => RecordResponse::success(prepared),
        Err(err) => RecordResponse::failure("prepare_record", &err),
    }
}

fn validation_failure(message: String) -> ValidationResponse {
    ValidationResponse {
        ok: false,
        errors: Vec::new(),
        message,
    }
}
