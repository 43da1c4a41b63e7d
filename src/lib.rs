//! Extract files from object trees
//!
//! Pulls file values out of a nested object tree so the tree can be sent as
//! JSON while the files travel separately, e.g. as multipart form fields:
//! - `Blob` and `File` values, when the host supports them
//! - `FileList` values, converted to arrays and walked
//! - `ReactNativeFile` references (`{uri, type, name}`)
//!
//! Each file is replaced by `null` in the tree and returned with its dotted
//! path. Extraction mutates the tree passed in.

pub mod error;
pub mod extract;
pub mod files;
pub mod platform;
pub mod tree;

pub use error::{Error, Result};
pub use extract::*;
pub use files::*;
pub use platform::*;
pub use tree::{is_object, Node};
