//! Error handling for mgw-store
//!
//! Store failures surface as core `MgwError` persistence variants so the
//! session can report them like any other error.

use std::path::Path;

use mgw_core::errors::MgwError;

pub use mgw_core::errors::Result;

/// Create an IO error for `operation` on `path`
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> MgwError {
    MgwError::persistence(operation, format!("{}: {}", path.display(), err))
}

/// Create an error for a snapshot that does not parse
pub fn corrupt_snapshot(path: &Path, err: serde_json::Error) -> MgwError {
    MgwError::Serialization {
        message: format!("{} is not a valid snapshot: {}", path.display(), err),
    }
}
