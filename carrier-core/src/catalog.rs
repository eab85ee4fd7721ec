use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A label file type offered to users: a stable code and a display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileType {
    pub code: String,
    pub name: String,
}

impl FileType {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl<C: Into<String>, N: Into<String>> From<(C, N)> for FileType {
    fn from((code, name): (C, N)) -> Self {
        Self::new(code, name)
    }
}

/// Ordered registry of label file types shared by every carrier integration.
///
/// Built once at startup from a base list; each integration folds its own
/// formats in with [`FileTypeCatalog::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTypeCatalog {
    entries: Vec<FileType>,
}

impl FileTypeCatalog {
    pub fn new(base: Vec<FileType>) -> Self {
        Self { entries: base }
    }

    /// Append `contribution` in its own order, skipping `sentinel` and every
    /// code the catalog already held before this merge.
    pub fn merge<I>(mut self, contribution: I, sentinel: &str) -> Self
    where
        I: IntoIterator<Item = FileType>,
    {
        let existing: HashSet<String> = self.entries.iter().map(|t| t.code.clone()).collect();

        for file_type in contribution {
            if file_type.code == sentinel || existing.contains(&file_type.code) {
                continue;
            }
            self.entries.push(file_type);
        }
        self
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|t| t.code == code)
    }

    pub fn entries(&self) -> &[FileType] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<FileType> {
        self.entries
    }
}
