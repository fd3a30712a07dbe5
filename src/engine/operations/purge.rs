use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What happened to one confirmed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    Deleted,
    Skipped { cause: String },
}

impl Outcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Outcome::Deleted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionResult {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Trait for removing a single path from disk.
pub trait Purger {
    /// Best-effort removal. A path that is already gone counts as deleted.
    fn purge(&self, path: &Path) -> Outcome;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsPurger;

impl FsPurger {
    pub fn new() -> Self {
        Self
    }

    fn remove(path: &Path) -> io::Result<()> {
        // symlink_metadata so a link is removed rather than followed
        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }
}

impl Purger for FsPurger {
    fn purge(&self, path: &Path) -> Outcome {
        match Self::remove(path) {
            Ok(()) => Outcome::Deleted,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Outcome::Deleted,
            Err(err) => Outcome::Skipped {
                cause: err.to_string(),
            },
        }
    }
}
