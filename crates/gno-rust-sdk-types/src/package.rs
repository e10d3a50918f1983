//! In-memory source packages submitted for execution or publication.

use serde::{Deserialize, Serialize};

/// A single named source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemFile {
    /// File name, e.g. `main.gno`.
    pub name: String,
    /// Full file contents.
    pub body: String,
}

impl MemFile {
    /// Create a file from its name and contents.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// An in-memory bundle of source files.
///
/// The same shape backs both ephemeral script execution and persistent
/// package publication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemPackage {
    /// Package name.
    pub name: String,
    /// Import path the package is addressed under.
    pub path: String,
    /// Ordered source files.
    pub files: Vec<MemFile>,
}

impl MemPackage {
    /// Create a package from its name, path, and files.
    pub fn new(name: impl Into<String>, path: impl Into<String>, files: Vec<MemFile>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            files,
        }
    }

    /// Whether the package carries no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_checks_files_only() {
        let empty = MemPackage::new("main", "", Vec::new());
        assert!(empty.is_empty());

        let package = MemPackage::new(
            "main",
            "",
            vec![MemFile::new("main.gno", "package main\nfunc main() {}")],
        );
        assert!(!package.is_empty());
    }

    #[test]
    fn test_serde_field_names() {
        let package = MemPackage::new("hello", "gno.land/p/demo/hello", vec![]);
        let json = serde_json::to_string(&package).unwrap();
        assert_eq!(
            json,
            r#"{"name":"hello","path":"gno.land/p/demo/hello","files":[]}"#
        );
    }
}
