use crate::config::RootMap;
use crate::engine::pattern::MatchPattern;
use crate::engine::utils::path::{relative_path, separator_depth};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A path whose root-relative form matched the pattern within its root's depth bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    pub path: PathBuf,
    pub depth: usize,
}

/// Trait for locating candidate paths under a set of roots.
pub trait Scanner {
    /// Never fails: unreadable directories only shrink the result.
    fn scan(&self, roots: &RootMap, pattern: &MatchPattern) -> Vec<Candidate>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WalkDirScanner;

impl WalkDirScanner {
    pub fn new() -> Self {
        Self
    }

    fn scan_root(root: &Path, max_depth: usize, pattern: &MatchPattern) -> RootScan {
        let mut scan = RootScan::default();

        // Walk depth is separator depth + 1, so nothing below this level can match.
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth.saturating_add(1))
            .follow_links(false);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(
                        "skipping unreadable entry under {}: {}",
                        root.display(),
                        err
                    );
                    scan.skipped += 1;
                    continue;
                }
            };

            let Some(relative) = relative_path(root, entry.path()) else {
                continue;
            };
            let depth = separator_depth(&relative);
            if depth <= max_depth && pattern.is_match(&relative) {
                scan.candidates.push(Candidate {
                    path: entry.into_path(),
                    depth,
                });
            }
        }

        if scan.skipped > 0 {
            debug!(
                "{} unreadable entries skipped under {}",
                scan.skipped,
                root.display()
            );
        }
        scan
    }
}

/// Matches under one root plus the number of walk errors passed over.
#[derive(Debug, Default)]
struct RootScan {
    candidates: Vec<Candidate>,
    skipped: usize,
}

impl Scanner for WalkDirScanner {
    fn scan(&self, roots: &RootMap, pattern: &MatchPattern) -> Vec<Candidate> {
        let roots: Vec<(&Path, usize)> = roots.iter().collect();

        let per_root: Vec<Vec<Candidate>> = roots
            .par_iter()
            .map(|(root, max_depth)| Self::scan_root(root, *max_depth, pattern).candidates)
            .collect();

        merge(per_root)
    }
}

/// Concatenate per-root results, keeping the first occurrence of each path.
fn merge(per_root: Vec<Vec<Candidate>>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    per_root
        .into_iter()
        .flatten()
        .filter(|candidate| seen.insert(candidate.path.clone()))
        .collect()
}
