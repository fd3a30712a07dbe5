use crate::config::{ResolvedConfig, RootMap};
use crate::error::Result;

mod operations;
mod pattern;
mod utils;

pub use self::operations::{
    Candidate, DeletionResult, FsPurger, Outcome, Purger, Scanner, WalkDirScanner,
};
pub use self::pattern::{MatchPattern, PatternMode};

/// Scan-and-delete engine over a fixed set of roots.
pub struct PurgeEngine {
    roots: RootMap,
    mode: PatternMode,
    scanner: WalkDirScanner,
    purger: Box<dyn Purger>,
}

impl PurgeEngine {
    pub fn new(roots: RootMap, mode: PatternMode) -> Self {
        Self {
            roots,
            mode,
            scanner: WalkDirScanner::new(),
            purger: Box::new(FsPurger::new()),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mode = if config.regex {
            PatternMode::Regex
        } else {
            PatternMode::Literal
        };
        Self::new(config.roots.clone(), mode)
    }

    /// Replace the filesystem purger, e.g. with a recording one.
    pub fn with_purger(mut self, purger: impl Purger + 'static) -> Self {
        self.purger = Box::new(purger);
        self
    }

    pub fn roots(&self) -> &RootMap {
        &self.roots
    }

    pub fn pattern(&self, name: &str) -> Result<MatchPattern> {
        MatchPattern::new(name, self.mode)
    }

    pub fn scan(&self, pattern: &MatchPattern) -> Vec<Candidate> {
        log::debug!(
            "scan name={:?} mode={:?} roots={}",
            pattern.name(),
            self.mode,
            self.roots.len()
        );
        let candidates = self.scanner.scan(&self.roots, pattern);
        log::debug!("scan found {} candidate(s)", candidates.len());
        candidates
    }

    /// Purge every path in order; one failure never stops the rest.
    pub fn purge_all<'a, I>(&self, paths: I) -> Vec<DeletionResult>
    where
        I: IntoIterator<Item = &'a std::path::Path>,
    {
        paths
            .into_iter()
            .map(|path| {
                let outcome = self.purger.purge(path);
                match &outcome {
                    Outcome::Deleted => log::debug!("deleted {}", path.display()),
                    Outcome::Skipped { cause } => {
                        log::warn!("skipped {}: {}", path.display(), cause)
                    }
                }
                DeletionResult {
                    path: path.to_path_buf(),
                    outcome,
                }
            })
            .collect()
    }
}
