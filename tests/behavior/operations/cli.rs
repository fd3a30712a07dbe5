use crate::trials;
use crate::*;
use assert_cmd::prelude::*;
use ipurge::error::Result;
use predicates::prelude::*;
use std::fs;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_cli_lists_matches_under_home_library,
        test_cli_lists_matches_as_json,
        test_cli_reads_extra_roots_from_config,
        test_cli_fails_on_unusable_cache_dir,
        test_cli_non_interactive_requires_name,
        test_cli_rejects_blank_name,
    ));
}

fn test_cli_lists_matches_under_home_library() -> Result<()> {
    let fx = Fixture::new();
    let name = fx.unique_name();
    let shallow = fx.mkdir(&format!("home/Library/Application Support/{name}App"))?;
    let deep = fx.mkdir(&format!("home/Library/Caches/a/{name}"))?;

    fx.command()
        .args(["--non-interactive", "--name", &name])
        .assert()
        .success()
        .stdout(predicate::str::contains(shallow.display().to_string()))
        .stdout(predicate::str::contains(deep.display().to_string()).not());
    Ok(())
}

fn test_cli_lists_matches_as_json() -> Result<()> {
    let fx = Fixture::new();
    let name = fx.unique_name();
    let found = fx.touch(&format!("home/Library/Preferences/com.{name}.plist"))?;

    let output = fx
        .command()
        .args(["--non-interactive", "--format", "json", "--name", &name])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let entries = value.as_array().expect("a JSON array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["path"], found.display().to_string());
    assert_eq!(entries[0]["depth"], 1);
    Ok(())
}

fn test_cli_reads_extra_roots_from_config() -> Result<()> {
    let fx = Fixture::new();
    let name = fx.unique_name();
    let extra = fx.mkdir("opt/vendor")?;
    let found = fx.touch(&format!("opt/vendor/lib/{name}.dylib"))?;
    let config = fx.path().join("config.toml");
    fs::write(
        &config,
        format!(
            "[[roots]]\npath = {:?}\nmax_depth = 1\n",
            extra.display().to_string()
        ),
    )?;

    fx.command()
        .arg("--config")
        .arg(&config)
        .args(["--non-interactive", "--name", &name])
        .assert()
        .success()
        .stdout(predicate::str::contains(found.display().to_string()));
    Ok(())
}

fn test_cli_fails_on_unusable_cache_dir() -> Result<()> {
    let fx = Fixture::new();

    fx.command()
        .env("IPURGE_DARWIN_USER_CACHE_DIR", "/")
        .args(["--non-interactive", "--name", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("DARWIN_USER_CACHE_DIR"));
    Ok(())
}

fn test_cli_non_interactive_requires_name() -> Result<()> {
    let fx = Fixture::new();

    fx.command()
        .arg("--non-interactive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires interactive input"));
    Ok(())
}

fn test_cli_rejects_blank_name() -> Result<()> {
    let fx = Fixture::new();

    fx.command()
        .args(["--non-interactive", "--name", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "You need to pass a program name.",
        ));
    Ok(())
}
