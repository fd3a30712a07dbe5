// Path helpers shared by the scan and purge operations
use std::path::{MAIN_SEPARATOR, Path};

/// Path of `path` relative to `root` as a string. `None` for the root itself or
/// for paths outside it.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let rel = rel.to_string_lossy();
    if rel.is_empty() {
        None
    } else {
        Some(rel.into_owned())
    }
}

/// Number of path separators in a relative path.
pub fn separator_depth(relative: &str) -> usize {
    relative.matches(MAIN_SEPARATOR).count()
}
