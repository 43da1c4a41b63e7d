//! React Native file references
//!
//! React Native has no in-memory file objects. Files are passed to `FormData`
//! as `{uri, type, name}` records pointing at the file system, so they are
//! wrapped in a dedicated type the extractor can recognize.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Plain `{uri, type, name}` record, as accepted by React Native `FormData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File system or content location.
    pub uri: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FileRecord {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            content_type: None,
            name: None,
        }
    }

    pub fn with_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A file referenced by URI.
///
/// Only values of this exact type are extracted. An object node that merely
/// has `uri`, `type` and `name` keys is walked like any other mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactNativeFile {
    uri: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl ReactNativeFile {
    /// Wraps a file record. Attributes are copied as-is, nothing is validated.
    pub fn new(record: FileRecord) -> Self {
        Self {
            uri: record.uri,
            content_type: record.content_type,
            name: record.name,
        }
    }

    /// Wraps every record, keeping their order.
    pub fn list<I>(records: I) -> Vec<Self>
    where
        I: IntoIterator<Item = FileRecord>,
    {
        records.into_iter().map(Self::new).collect()
    }

    /// Parses a JSON array of file records and wraps them.
    pub fn list_from_json(value: Value) -> Result<Vec<Self>> {
        let records: Vec<FileRecord> = serde_json::from_value(value)?;
        Ok(Self::list(records))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// MIME type.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<FileRecord> for ReactNativeFile {
    fn from(record: FileRecord) -> Self {
        Self::new(record)
    }
}
