use crate::trials;
use crate::*;
use ipurge::engine::{PatternMode, PurgeEngine};
use ipurge::error::Result;
use ipurge::workflow::{Event, Phase, State, Step, Workflow};

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_workflow_deletes_confirmed_selection,
        test_workflow_declined_confirm_keeps_files,
        test_workflow_blank_name_reports_error,
    ));
}

fn test_workflow_deletes_confirmed_selection() -> Result<()> {
    let fx = Fixture::new();
    let roots = fx.roots(&[("Applications", 1), ("Library", 1)])?;
    let app = fx.mkdir("Applications/FooApp")?;
    let prefs = fx.touch("Library/Preferences/com.foo.plist")?;
    let engine = PurgeEngine::new(roots, PatternMode::Literal);

    let mut workflow = Workflow::new(&engine);
    workflow.handle(Event::Submit("Foo".to_string()));
    assert_eq!(workflow.phase(), Phase::Scanning);
    workflow.advance();

    let State::Selecting(picker) = workflow.state() else {
        panic!("expected candidates, got {}", workflow.phase());
    };
    let index = picker
        .candidates
        .iter()
        .position(|c| c.path == app)
        .expect("FooApp is a candidate");
    assert!(picker.candidates.iter().any(|c| c.path == prefs));

    for event in [
        Event::Focus(index),
        Event::Toggle,
        Event::Delete,
        Event::Confirm(true),
    ] {
        assert_eq!(workflow.handle(event), Step::Continue);
    }

    let State::Done { results } = workflow.state() else {
        panic!("expected a report, got {}", workflow.phase());
    };
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, app);
    assert!(results[0].outcome.is_deleted());
    assert!(!app.exists());
    assert!(prefs.exists());
    Ok(())
}

fn test_workflow_declined_confirm_keeps_files() -> Result<()> {
    let fx = Fixture::new();
    let roots = fx.roots(&[("Applications", 1)])?;
    let app = fx.mkdir("Applications/FooApp")?;
    let engine = PurgeEngine::new(roots, PatternMode::Literal);

    let mut workflow = Workflow::with_name(&engine, "fooapp");
    workflow.handle(Event::Submit("fooapp".to_string()));
    workflow.advance();
    workflow.handle(Event::Toggle);
    workflow.handle(Event::Delete);

    let State::Confirm(picker) = workflow.state() else {
        panic!("expected confirmation, got {}", workflow.phase());
    };
    assert!(picker.selection.contains(&app));
    assert_eq!(workflow.handle(Event::Confirm(false)), Step::Exit);
    assert!(app.exists());
    Ok(())
}

fn test_workflow_blank_name_reports_error() -> Result<()> {
    let fx = Fixture::new();
    let roots = fx.roots(&[("Applications", 1)])?;
    let engine = PurgeEngine::new(roots, PatternMode::Literal);

    let mut workflow = Workflow::new(&engine);
    workflow.handle(Event::Submit("   ".to_string()));

    let State::Error { message } = workflow.state() else {
        panic!("expected an error, got {}", workflow.phase());
    };
    assert_eq!(message, "You need to pass a program name.");

    workflow.handle(Event::Back);
    assert_eq!(workflow.phase(), Phase::Input);
    Ok(())
}
