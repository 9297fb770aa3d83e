//! Flat-file document store for doorbase
//!
//! The entire persistent state is a single JSON file: one object mapping
//! collection names to arrays of records. Load and save are pure functions
//! over that file; nothing is cached between calls.
//!
//! Failure handling is asymmetric on purpose:
//!
//! - reads degrade to an empty result (missing file, absent key,
//!   unparseable document) and log the cause to stderr
//! - writes return the error to the caller

mod errors;
mod file;

pub use errors::{StoreError, StoreResult};
pub use file::{Document, Store};
