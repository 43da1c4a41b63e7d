//! File values that can be embedded in an object tree
//!
//! Each module provides one family of file-like values.

mod blob;
mod react_native;

pub use blob::*;
pub use react_native::*;

/// A file taken out of an object tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upload {
    Blob(Blob),
    File(File),
    ReactNative(ReactNativeFile),
}

impl Upload {
    /// File name, when the value carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Upload::Blob(_) => None,
            Upload::File(file) => Some(file.name()),
            Upload::ReactNative(file) => file.name(),
        }
    }

    /// MIME type, when known.
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Upload::Blob(blob) => blob.content_type(),
            Upload::File(file) => file.content_type(),
            Upload::ReactNative(file) => file.content_type(),
        }
    }

    pub fn as_react_native(&self) -> Option<&ReactNativeFile> {
        match self {
            Upload::ReactNative(file) => Some(file),
            _ => None,
        }
    }
}

impl From<Blob> for Upload {
    fn from(blob: Blob) -> Self {
        Upload::Blob(blob)
    }
}

impl From<File> for Upload {
    fn from(file: File) -> Self {
        Upload::File(file)
    }
}

impl From<ReactNativeFile> for Upload {
    fn from(file: ReactNativeFile) -> Self {
        Upload::ReactNative(file)
    }
}
