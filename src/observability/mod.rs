//! Observability subsystem for doorbase
//!
//! - Structured logs (one JSON object per line)
//! - Deterministic key ordering
//! - Every line carries an RFC 3339 UTC timestamp
//! - INFO/WARN to stdout, ERROR to stderr
//! - Synchronous, no buffering
//!
//! Logging is operational only; nothing in the API contract depends on it.

mod logger;

pub use logger::{Logger, Severity};
