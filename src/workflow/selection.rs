use std::path::{Path, PathBuf};

/// Paths staged for deletion, unique and in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    paths: Vec<PathBuf>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `path` if absent, otherwise remove it. Returns whether it is now selected.
    pub fn toggle(&mut self, path: &Path) -> bool {
        match self.paths.iter().position(|p| p == path) {
            Some(index) => {
                self.paths.remove(index);
                false
            }
            None => {
                self.paths.push(path.to_path_buf());
                true
            }
        }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }
}
