//! Native binary file values
//!
//! `Blob` is raw bytes with an optional MIME type, `File` is a blob with a
//! name, and `FileList` is a read-only sequence of files as produced by a
//! file picker.

use std::sync::Arc;

use bytes::Bytes;

/// Binary payload with an optional MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Bytes,
    content_type: Option<String>,
}

impl Blob {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            content_type: None,
        }
    }

    pub fn with_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// A named blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    blob: Blob,
    name: String,
    last_modified: Option<u64>,
}

impl File {
    pub fn new(data: impl Into<Bytes>, name: impl Into<String>) -> Self {
        Self {
            blob: Blob::new(data),
            name: name.into(),
            last_modified: None,
        }
    }

    pub fn with_type(mut self, content_type: impl Into<String>) -> Self {
        self.blob = self.blob.with_type(content_type);
        self
    }

    /// Milliseconds since the Unix epoch.
    pub fn with_last_modified(mut self, millis: u64) -> Self {
        self.last_modified = Some(millis);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_modified(&self) -> Option<u64> {
        self.last_modified
    }

    pub fn blob(&self) -> &Blob {
        &self.blob
    }

    pub fn data(&self) -> &Bytes {
        self.blob.data()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.blob.content_type()
    }
}

/// Read-only list of files.
///
/// The list cannot be modified in place. Walkers that need to null out
/// entries must copy it into an owned sequence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    files: Arc<[File]>,
}

impl FileList {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&File> {
        self.files.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, File> {
        self.files.iter()
    }
}

impl FromIterator<File> for FileList {
    fn from_iter<I: IntoIterator<Item = File>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<File>> for FileList {
    fn from(files: Vec<File>) -> Self {
        Self {
            files: files.into(),
        }
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a File;
    type IntoIter = std::slice::Iter<'a, File>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
