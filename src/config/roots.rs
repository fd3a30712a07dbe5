use crate::config::conf::ConfSource;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key of the OS configuration value naming the per-user cache directory.
pub const USER_CACHE_DIR_KEY: &str = "DARWIN_USER_CACHE_DIR";
/// Key of the OS configuration value naming the per-user temporary directory.
pub const USER_TEMP_DIR_KEY: &str = "DARWIN_USER_TEMP_DIR";

pub const APP_ROOT_PATH: &str = "/Applications";
pub const LIB_ROOT_PATH: &str = "/Library";
pub const USR_LOCAL_PATH: &str = "/usr/local";
pub const PRIV_VAR_PATH: &str = "/private/var";

/// Scan roots keyed by normalized absolute path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootMap {
    roots: BTreeMap<PathBuf, usize>,
}

impl RootMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root. A path that normalizes to an existing key replaces its depth.
    pub fn insert(&mut self, path: impl AsRef<Path>, max_depth: usize) -> Result<()> {
        let path = path.as_ref();
        if !path.is_absolute() {
            return Err(Error::InvalidRoot {
                path: path.to_path_buf(),
                message: "path must be absolute".to_string(),
            });
        }
        if max_depth == 0 {
            return Err(Error::InvalidRoot {
                path: path.to_path_buf(),
                message: "max depth must be at least 1".to_string(),
            });
        }

        let key = normalize(path);
        if let Some(previous) = self.roots.insert(key.clone(), max_depth)
            && previous != max_depth
        {
            warn!(
                "scan root {} configured twice; max depth {} replaces {}",
                key.display(),
                max_depth,
                previous
            );
        }
        Ok(())
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<usize> {
        self.roots.get(&normalize(path.as_ref())).copied()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, usize)> {
        self.roots
            .iter()
            .map(|(path, depth)| (path.as_path(), *depth))
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Build the fixed set of scan roots.
///
/// The two per-user directories are looked up through `conf`; each contributes its
/// parent directory. A failed lookup is fatal for the caller.
pub fn resolve_roots(home: &Path, conf: &dyn ConfSource) -> Result<RootMap> {
    let mut roots = RootMap::new();

    roots.insert(home.join("Library"), 1)?;
    roots.insert(APP_ROOT_PATH, 1)?;
    roots.insert(LIB_ROOT_PATH, 1)?;
    roots.insert(USR_LOCAL_PATH, 1)?;
    roots.insert(PRIV_VAR_PATH, 2)?;

    for key in [USER_CACHE_DIR_KEY, USER_TEMP_DIR_KEY] {
        let value = conf.lookup(key)?;
        let parent = Path::new(&value).parent().ok_or_else(|| Error::ConfValue {
            key: key.to_string(),
            message: format!("'{value}' has no parent directory"),
        })?;
        debug!("{key}={value}, scanning parent {}", parent.display());
        roots.insert(parent, 1)?;
    }

    Ok(roots)
}
