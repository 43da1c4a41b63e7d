//! Host capability detection
//!
//! Not every host can produce every kind of file value. A capability profile
//! tells the extractor which host classes exist; checks for a missing class
//! always come back negative instead of failing.

use serde::{Deserialize, Serialize};

/// Host file classes whose availability varies between platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Raw binary blobs.
    Blob,
    /// Blobs carrying a file name.
    File,
    /// Read-only lists of files, e.g. from a file picker.
    FileList,
}

/// Answers whether a capability is available on the current host.
pub trait Capabilities {
    fn supports(&self, capability: Capability) -> bool;
}

impl<F> Capabilities for F
where
    F: Fn(Capability) -> bool,
{
    fn supports(&self, capability: Capability) -> bool {
        self(capability)
    }
}

/// Static capability profile.
///
/// Missing fields default to `true` when deserialized, so `{}` describes a
/// host with every capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub blob: bool,
    pub file: bool,
    pub file_list: bool,
}

impl Platform {
    /// Web browsers provide every capability.
    pub const fn browser() -> Self {
        Self {
            blob: true,
            file: true,
            file_list: true,
        }
    }

    /// React Native has blobs but no `File` or `FileList`.
    pub const fn react_native() -> Self {
        Self {
            blob: true,
            file: false,
            file_list: false,
        }
    }

    /// A host without any native file classes.
    pub const fn bare() -> Self {
        Self {
            blob: false,
            file: false,
            file_list: false,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::browser()
    }
}

impl Capabilities for Platform {
    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Blob => self.blob,
            Capability::File => self.file,
            Capability::FileList => self.file_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_supports_everything() {
        let platform = Platform::default();
        assert!(platform.supports(Capability::Blob));
        assert!(platform.supports(Capability::File));
        assert!(platform.supports(Capability::FileList));
    }

    #[test]
    fn test_presets() {
        let rn = Platform::react_native();
        assert!(rn.supports(Capability::Blob));
        assert!(!rn.supports(Capability::File));
        assert!(!rn.supports(Capability::FileList));

        let bare = Platform::bare();
        assert!(!bare.supports(Capability::Blob));
    }

    #[test]
    fn test_deserialize_partial_profile() {
        let platform: Platform = serde_json::from_str(r#"{"file_list": false}"#).unwrap();
        assert!(platform.blob);
        assert!(platform.file);
        assert!(!platform.file_list);

        let empty: Platform = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Platform::browser());
    }

    #[test]
    fn test_closure_capabilities() {
        let only_blobs = |capability: Capability| capability == Capability::Blob;
        assert!(only_blobs.supports(Capability::Blob));
        assert!(!only_blobs.supports(Capability::FileList));
    }
}
