//! Data structures for the result of a directory walk.
//!
//! A [`FileList`] holds every discovered file as a path relative to the scan
//! root, in the order the walk produced them.

use std::path::{Path, PathBuf};

/// Ordered collection of relative file paths found under one root.
///
/// Entries keep traversal order; nothing here sorts or deduplicates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    entries: Vec<PathBuf>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path relative to the scan root.
    pub fn push(&mut self, relative: PathBuf) {
        self.entries.push(relative);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    /// The trailing count line, e.g. `共有 2 个文件。`.
    pub fn summary(&self) -> String {
        format!("共有 {} 个文件。", self.len())
    }
}

impl From<Vec<PathBuf>> for FileList {
    fn from(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_entries() {
        let list = FileList::from(vec![PathBuf::from("a.txt"), PathBuf::from("sub/b.txt")]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.summary(), "共有 2 个文件。");
    }

    #[test]
    fn test_empty_summary() {
        let list = FileList::new();
        assert!(list.is_empty());
        assert_eq!(list.summary(), "共有 0 个文件。");
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut list = FileList::new();
        list.push(PathBuf::from("z.txt"));
        list.push(PathBuf::from("a.txt"));
        let names: Vec<&Path> = list.iter().collect();
        assert_eq!(names, vec![Path::new("z.txt"), Path::new("a.txt")]);
    }
}
