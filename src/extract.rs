//! File extraction from object trees
//!
//! Walks a tree depth first, moves every file value it meets into a flat
//! list together with its dotted path, and leaves `Null` in its place.
//!
//! The walk mutates the caller's tree. Slots are nulled rather than removed
//! so arrays keep their length and every recorded index still points at the
//! position the file came from.

use tracing::{debug, trace};

use crate::files::Upload;
use crate::platform::{Capabilities, Capability, Platform};
use crate::tree::Node;

/// A file taken out of a tree and the path it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Dot separated keys and indices, e.g. `variables.files.0`.
    pub path: String,
    pub file: Upload,
}

/// Classes of extractable values, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// A blob with a file name.
    File,
    /// Any blob, named or not.
    Blob,
    /// A [`ReactNativeFile`](crate::files::ReactNativeFile).
    ReactNativeFile,
}

impl FileClass {
    pub const PRIORITY: [FileClass; 3] = [
        FileClass::File,
        FileClass::Blob,
        FileClass::ReactNativeFile,
    ];

    /// Whether `node` belongs to this class on the given platform.
    ///
    /// Host classes never match when the platform lacks them.
    pub fn matches<C>(self, node: &Node, platform: &C) -> bool
    where
        C: Capabilities + ?Sized,
    {
        match self {
            FileClass::File => {
                platform.supports(Capability::File) && matches!(node, Node::File(_))
            }
            // A file is also a blob
            FileClass::Blob => {
                platform.supports(Capability::Blob)
                    && matches!(node, Node::Blob(_) | Node::File(_))
            }
            FileClass::ReactNativeFile => matches!(node, Node::ReactNativeFile(_)),
        }
    }
}

/// First class in [`FileClass::PRIORITY`] that `node` belongs to.
pub fn classify<C>(node: &Node, platform: &C) -> Option<FileClass>
where
    C: Capabilities + ?Sized,
{
    FileClass::PRIORITY
        .into_iter()
        .find(|class| class.matches(node, platform))
}

/// Extracts files from a tree, assuming every host file class is available.
///
/// See [`extract_files_with`].
pub fn extract_files(tree: &mut Node, tree_path: &str) -> Vec<ExtractedFile> {
    extract_files_with(tree, tree_path, &Platform::default())
}

/// Extracts files from a tree, replacing each one with `Null`.
///
/// `tree_path` prefixes every returned path. Roots that are not objects
/// yield nothing and are left untouched. The root itself is never extracted.
/// Read-only file lists are replaced by arrays before being walked when the
/// platform supports them.
pub fn extract_files_with<C>(tree: &mut Node, tree_path: &str, platform: &C) -> Vec<ExtractedFile>
where
    C: Capabilities + ?Sized,
{
    let mut files = Vec::new();

    if !tree.is_object() {
        return files;
    }

    if platform.supports(Capability::FileList) {
        tree.upgrade_file_list();
    }

    // If a tree path was provided, append a dot
    let prefix = if tree_path.is_empty() {
        String::new()
    } else {
        format!("{tree_path}.")
    };

    recurse(tree, &prefix, platform, &mut files);

    debug!(count = files.len(), "extracted files from tree");
    files
}

fn recurse<C>(node: &mut Node, node_path: &str, platform: &C, files: &mut Vec<ExtractedFile>)
where
    C: Capabilities + ?Sized,
{
    match node {
        Node::Array(items) => {
            for (index, child) in items.iter_mut().enumerate() {
                visit(child, node_path, &index.to_string(), platform, files);
            }
        }
        Node::Object(map) => {
            for (key, child) in map.iter_mut() {
                visit(child, node_path, key, platform, files);
            }
        }
        // Scalars, files and unconverted file lists have no walkable children
        _ => {}
    }
}

fn visit<C>(
    child: &mut Node,
    node_path: &str,
    key: &str,
    platform: &C,
    files: &mut Vec<ExtractedFile>,
) where
    C: Capabilities + ?Sized,
{
    if !child.is_object() {
        return;
    }

    let path = format!("{node_path}{key}");

    if classify(child, platform).is_some() {
        // Every classified node is a blob, file or React Native file
        let Some(file) = child.take_upload() else {
            return;
        };
        trace!(%path, "extracted file");
        files.push(ExtractedFile { path, file });
        // No further checks or recursion
        return;
    }

    if platform.supports(Capability::FileList) {
        if let Some(len) = child.upgrade_file_list() {
            trace!(%path, len, "converted file list to array");
        }
    }

    recurse(child, &format!("{path}."), platform, files);
}
