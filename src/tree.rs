//! Object tree model
//!
//! A `Node` is a JSON-like value that can also hold file values. Mappings
//! keep their keys in insertion order so walks are deterministic.

use std::ops::{Index, IndexMut};

use indexmap::IndexMap;
use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};
use crate::files::{Blob, File, FileList, ReactNativeFile, Upload};

static NULL: Node = Node::Null;

/// Free-function form of [`Node::is_object`].
pub fn is_object(node: &Node) -> bool {
    node.is_object()
}

/// A node of an object tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Node>),
    Object(IndexMap<String, Node>),
    Blob(Blob),
    File(File),
    /// Read-only, see [`FileList`].
    FileList(FileList),
    ReactNativeFile(ReactNativeFile),
}

impl Node {
    /// Whether the node is an object that may hold children or be a file.
    ///
    /// Scalars and null are never walked nor extracted.
    pub fn is_object(&self) -> bool {
        !matches!(
            self,
            Node::Null | Node::Bool(_) | Node::Number(_) | Node::String(_)
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Human readable name of the node kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
            Node::Blob(_) => "blob",
            Node::File(_) => "file",
            Node::FileList(_) => "file list",
            Node::ReactNativeFile(_) => "React Native file",
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Moves a file value out of the node, leaving `Null` behind.
    ///
    /// Any other node is left untouched.
    pub(crate) fn take_upload(&mut self) -> Option<Upload> {
        match std::mem::take(self) {
            Node::Blob(blob) => Some(Upload::Blob(blob)),
            Node::File(file) => Some(Upload::File(file)),
            Node::ReactNativeFile(file) => Some(Upload::ReactNative(file)),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Replaces a read-only file list with an owned array of its files.
    ///
    /// Returns the list length when a conversion happened.
    pub(crate) fn upgrade_file_list(&mut self) -> Option<usize> {
        let Node::FileList(list) = self else {
            return None;
        };
        let items: Vec<Node> = list.iter().cloned().map(Node::File).collect();
        let len = items.len();
        *self = Node::Array(items);
        Some(len)
    }

    /// Converts the tree to JSON.
    ///
    /// Fails on the first file-like node, so files must be extracted first.
    pub fn to_json(&self) -> Result<Value> {
        Ok(match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => Value::Number(n.clone()),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(items) => {
                Value::Array(items.iter().map(Node::to_json).collect::<Result<_>>()?)
            }
            Node::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| Ok((key.clone(), value.to_json()?)))
                    .collect::<Result<Map<String, Value>>>()?,
            ),
            other => return Err(Error::Binary { kind: other.kind() }),
        })
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Array(items) => serializer.collect_seq(items),
            Node::Object(map) => serializer.collect_map(map),
            other => Err(S::Error::custom(Error::Binary { kind: other.kind() })),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Number(n.into())
    }
}

impl From<u64> for Node {
    fn from(n: u64) -> Self {
        Node::Number(n.into())
    }
}

impl From<f64> for Node {
    /// Non-finite numbers become `Null`, like in JSON.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Node::Null, Node::Number)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_owned())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Array(items)
    }
}

impl From<Blob> for Node {
    fn from(blob: Blob) -> Self {
        Node::Blob(blob)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

impl From<FileList> for Node {
    fn from(list: FileList) -> Self {
        Node::FileList(list)
    }
}

impl From<ReactNativeFile> for Node {
    fn from(file: ReactNativeFile) -> Self {
        Node::ReactNativeFile(file)
    }
}

impl From<Upload> for Node {
    fn from(upload: Upload) -> Self {
        match upload {
            Upload::Blob(blob) => Node::Blob(blob),
            Upload::File(file) => Node::File(file),
            Upload::ReactNative(file) => Node::ReactNativeFile(file),
        }
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Node::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Index<&str> for Node {
    type Output = Node;

    /// Missing keys and non-object nodes yield `Null`.
    fn index(&self, key: &str) -> &Node {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Node {
    type Output = Node;

    /// Out of range indices and non-array nodes yield `Null`.
    fn index(&self, index: usize) -> &Node {
        match self {
            Node::Array(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}

impl IndexMut<&str> for Node {
    /// Inserts `Null` for missing keys and turns a `Null` node into an object.
    ///
    /// # Panics
    /// If the node is neither an object nor null.
    fn index_mut(&mut self, key: &str) -> &mut Node {
        if self.is_null() {
            *self = Node::Object(IndexMap::new());
        }
        match self {
            Node::Object(map) => map.entry(key.to_owned()).or_default(),
            other => panic!("cannot index into {} with key {key:?}", other.kind()),
        }
    }
}

impl IndexMut<usize> for Node {
    /// # Panics
    /// If the node is not an array or the index is out of range.
    fn index_mut(&mut self, index: usize) -> &mut Node {
        match self {
            Node::Array(items) => &mut items[index],
            other => panic!("cannot index into {} with {index}", other.kind()),
        }
    }
}
