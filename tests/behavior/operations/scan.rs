use crate::trials;
use crate::*;
use ipurge::config::RootMap;
use ipurge::engine::{MatchPattern, PatternMode, Scanner, WalkDirScanner};
use ipurge::error::Result;
use std::collections::HashSet;
use std::path::PathBuf;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_scan_respects_each_root_depth,
        test_scan_depth_one_excludes_depth_two,
        test_scan_empty_roots,
        test_scan_is_case_insensitive,
        test_scan_regex_mode,
    ));
}

fn test_scan_respects_each_root_depth() -> Result<()> {
    let fx = Fixture::new();
    let roots = fx.roots(&[("Applications", 1), ("private/var", 2)])?;
    for rel in [
        "Applications/FooApp",
        "Applications/x/FooApp",
        "Applications/x/y/FooApp",
        "private/var/db/FooApp",
        "private/var/db/receipts/FooApp.bom",
        "private/var/db/receipts/deep/FooApp.plist",
    ] {
        fx.mkdir(rel)?;
    }

    let pattern = MatchPattern::literal("fooapp")?;
    let found = WalkDirScanner::new().scan(&roots, &pattern);

    for candidate in &found {
        let (root, max_depth) = roots
            .iter()
            .find(|(root, _)| candidate.path.starts_with(root))
            .expect("candidate under a root");
        assert!(
            candidate.depth <= max_depth,
            "{} deeper than {} allows",
            candidate.path.display(),
            root.display()
        );
    }

    let found: HashSet<PathBuf> = found.into_iter().map(|c| c.path).collect();
    let expected: HashSet<PathBuf> = [
        "Applications/FooApp",
        "Applications/x/FooApp",
        "private/var/db/FooApp",
        "private/var/db/receipts/FooApp.bom",
    ]
    .iter()
    .map(|rel| fx.path().join(rel))
    .collect();
    assert_eq!(found, expected);
    Ok(())
}

fn test_scan_depth_one_excludes_depth_two() -> Result<()> {
    let fx = Fixture::new();
    let roots = fx.roots(&[("root", 1)])?;
    let shallow = fx.touch("root/a/match.txt")?;
    fx.touch("root/a/b/match.txt")?;

    let pattern = MatchPattern::literal("match")?;
    let found = WalkDirScanner::new().scan(&roots, &pattern);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].path, shallow);
    assert_eq!(found[0].depth, 1);
    Ok(())
}

fn test_scan_empty_roots() -> Result<()> {
    let pattern = MatchPattern::literal("anything")?;
    assert!(WalkDirScanner::new().scan(&RootMap::new(), &pattern).is_empty());
    Ok(())
}

fn test_scan_is_case_insensitive() -> Result<()> {
    let fx = Fixture::new();
    let roots = fx.roots(&[("Library", 1)])?;
    let prefs = fx.touch("Library/Preferences/COM.FOOCORP.FOO.plist")?;

    let found = WalkDirScanner::new().scan(&roots, &MatchPattern::literal("foocorp")?);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].path, prefs);
    Ok(())
}

fn test_scan_regex_mode() -> Result<()> {
    let fx = Fixture::new();
    let roots = fx.roots(&[("Library", 1)])?;
    let a = fx.mkdir("Library/Caches/foo-helper")?;
    let b = fx.mkdir("Library/Caches/foo_agent")?;
    fx.mkdir("Library/Caches/bar")?;

    let pattern = MatchPattern::new(r"foo[-_](helper|agent)$", PatternMode::Regex)?;
    let found: HashSet<PathBuf> = WalkDirScanner::new()
        .scan(&roots, &pattern)
        .into_iter()
        .map(|c| c.path)
        .collect();
    assert_eq!(found, HashSet::from([a, b]));
    Ok(())
}
