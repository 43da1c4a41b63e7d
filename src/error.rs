//! Error types for the fallible edges of the crate
//!
//! File extraction itself never fails. Errors only come from converting
//! trees and file records to and from JSON.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A file-like node was reached while serializing a tree.
    #[error("cannot serialize {kind} as JSON, extract files from the tree first")]
    Binary { kind: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
