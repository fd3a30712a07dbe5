use crate::trials;
use crate::*;
use ipurge::config::RootMap;
use ipurge::engine::{FsPurger, Outcome, PatternMode, PurgeEngine, Purger};
use ipurge::error::Result;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_purge_missing_path_is_deleted,
        test_purge_directory_tree,
        test_purge_all_reports_in_order,
    ));
}

fn test_purge_missing_path_is_deleted() -> Result<()> {
    let fx = Fixture::new();
    let ghost = fx.path().join("Applications/GhostApp");

    assert_eq!(FsPurger::new().purge(&ghost), Outcome::Deleted);
    Ok(())
}

fn test_purge_directory_tree() -> Result<()> {
    let fx = Fixture::new();
    fx.touch("Applications/FooApp/Contents/MacOS/foo")?;
    fx.touch("Applications/FooApp/Contents/Info.plist")?;
    let app = fx.path().join("Applications/FooApp");

    assert_eq!(FsPurger::new().purge(&app), Outcome::Deleted);
    assert!(!app.exists());
    assert!(fx.path().join("Applications").exists());
    Ok(())
}

fn test_purge_all_reports_in_order() -> Result<()> {
    let fx = Fixture::new();
    let first = fx.touch("Library/Foo/first.plist")?;
    let missing = fx.path().join("Library/Foo/missing");
    // a path below a regular file cannot be removed
    let blocked = fx.touch("Library/keep.plist")?.join("child");
    let last = fx.mkdir("Library/Caches/com.foo")?;

    let engine = PurgeEngine::new(RootMap::new(), PatternMode::Literal);
    let results = engine.purge_all([
        first.as_path(),
        missing.as_path(),
        blocked.as_path(),
        last.as_path(),
    ]);

    let paths: Vec<_> = results.iter().map(|r| r.path.clone()).collect();
    assert_eq!(paths, vec![first.clone(), missing, blocked, last.clone()]);
    assert!(results[0].outcome.is_deleted());
    assert!(results[1].outcome.is_deleted());
    if cfg!(unix) {
        assert!(matches!(results[2].outcome, Outcome::Skipped { .. }));
    }
    assert!(results[3].outcome.is_deleted());
    assert!(fx.path().join("Library/keep.plist").exists());
    assert!(!first.exists());
    assert!(!last.exists());
    Ok(())
}
