//! Input → scan → select → confirm → delete state machine.
//!
//! The workflow owns the candidate list and the selection for the current name and
//! never touches a terminal: a [`Frontend`] supplies events and a [`Render`] sink
//! receives a [`View`] after each transition.

use crate::engine::{Candidate, DeletionResult, MatchPattern, PurgeEngine};
use crate::error::{Error, Result};
use log::debug;
use std::mem;

mod event;
mod selection;
mod view;

pub use self::event::Event;
pub use self::selection::SelectionSet;
pub use self::view::{Frontend, Phase, Render, Row, View};

/// Longest program name accepted through [`Event::Char`].
pub const MAX_NAME_LEN: usize = 20;

/// Candidates of one scan together with the cursor and the selection.
#[derive(Debug, Clone, Default)]
pub struct Picker {
    pub candidates: Vec<Candidate>,
    pub cursor: usize,
    pub selection: SelectionSet,
}

impl Picker {
    fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            cursor: 0,
            selection: SelectionSet::new(),
        }
    }

    fn toggle_cursor(&mut self) {
        if let Some(candidate) = self.candidates.get(self.cursor) {
            self.selection.toggle(&candidate.path);
        }
    }

    fn rows(&self) -> Vec<Row<'_>> {
        self.candidates
            .iter()
            .map(|c| Row {
                path: &c.path,
                selected: self.selection.contains(&c.path),
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum State {
    Input { text: String },
    Scanning { pattern: MatchPattern },
    Selecting(Picker),
    Confirm(Picker),
    Done { results: Vec<DeletionResult> },
    Error { message: String },
}

impl State {
    pub fn phase(&self) -> Phase {
        match self {
            State::Input { .. } => Phase::Input,
            State::Scanning { .. } => Phase::Scanning,
            State::Selecting(_) => Phase::Selecting,
            State::Confirm(_) => Phase::Confirm,
            State::Done { .. } => Phase::Done,
            State::Error { .. } => Phase::Error,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        State::Input {
            text: String::new(),
        }
    }
}

/// Whether the process should keep going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// How a driven session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finish {
    Cancelled,
    Completed(Vec<DeletionResult>),
}

pub struct Workflow<'a> {
    engine: &'a PurgeEngine,
    state: State,
}

impl<'a> Workflow<'a> {
    pub fn new(engine: &'a PurgeEngine) -> Self {
        Self {
            engine,
            state: State::default(),
        }
    }

    /// Start with `name` already typed into the input.
    pub fn with_name(engine: &'a PurgeEngine, name: &str) -> Self {
        Self {
            engine,
            state: State::Input {
                text: name.to_string(),
            },
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            State::Input { text } => View::Input { text },
            State::Scanning { pattern } => View::Scanning {
                name: pattern.name(),
            },
            State::Selecting(picker) => View::Selecting {
                rows: picker.rows(),
                cursor: picker.cursor,
            },
            State::Confirm(picker) => View::Confirm {
                selection: picker.selection.as_slice(),
            },
            State::Done { results } => View::Done { results },
            State::Error { message } => View::Error { message },
        }
    }

    /// Apply one user event. Events with no transition in the current state are ignored.
    ///
    /// Cancelling anywhere, or declining the delete confirmation, ends the session.
    pub fn handle(&mut self, event: Event) -> Step {
        match (&self.state, &event) {
            (_, Event::Cancel) => return Step::Exit,
            (State::Confirm(picker), Event::Confirm(false)) => {
                debug!(
                    "deletion of {} path(s) declined, exiting",
                    picker.selection.len()
                );
                return Step::Exit;
            }
            _ => {}
        }

        let from = self.phase();
        let state = mem::take(&mut self.state);
        self.state = match (state, event) {
            (State::Input { mut text }, Event::Char(c)) => {
                if text.chars().count() < MAX_NAME_LEN {
                    text.push(c);
                }
                State::Input { text }
            }
            (State::Input { mut text }, Event::Backspace) => {
                text.pop();
                State::Input { text }
            }
            (State::Input { .. }, Event::Submit(name)) => self.submit(&name),

            (State::Selecting(mut picker), Event::Up) => {
                picker.cursor = picker.cursor.saturating_sub(1);
                State::Selecting(picker)
            }
            (State::Selecting(mut picker), Event::Down) => {
                if picker.cursor + 1 < picker.candidates.len() {
                    picker.cursor += 1;
                }
                State::Selecting(picker)
            }
            (State::Selecting(mut picker), Event::Focus(index)) => {
                if index < picker.candidates.len() {
                    picker.cursor = index;
                }
                State::Selecting(picker)
            }
            (State::Selecting(mut picker), Event::Toggle) => {
                picker.toggle_cursor();
                State::Selecting(picker)
            }
            (State::Selecting(picker), Event::Delete) => {
                if picker.selection.is_empty() {
                    error_state(&Error::NothingSelected)
                } else {
                    State::Confirm(picker)
                }
            }
            (State::Selecting(_), Event::Back) => State::default(),

            (State::Confirm(picker), Event::Confirm(true)) => State::Done {
                results: self.engine.purge_all(picker.selection.iter()),
            },

            (State::Error { .. }, Event::Back) => State::default(),

            (state, event) => {
                debug!("ignoring {event:?} in {from}");
                state
            }
        };

        if self.phase() != from {
            debug!("workflow {from} -> {}", self.phase());
        }
        Step::Continue
    }

    /// Run pending work: a submitted name is scanned and the candidates offered.
    pub fn advance(&mut self) {
        if let State::Scanning { pattern } = &self.state {
            let candidates = self.engine.scan(pattern);
            self.state = State::Selecting(Picker::new(candidates));
            debug!("workflow {} -> {}", Phase::Scanning, Phase::Selecting);
        }
    }

    /// Drive the workflow until it completes or the user cancels.
    pub fn drive(&mut self, frontend: &mut dyn Frontend, sink: &mut dyn Render) -> Result<Finish> {
        loop {
            sink.render(&self.view())?;

            if matches!(self.state, State::Scanning { .. }) {
                self.advance();
                continue;
            }
            if let State::Done { results } = &self.state {
                return Ok(Finish::Completed(results.clone()));
            }

            let event = frontend.next_event(&self.view())?;
            if self.handle(event) == Step::Exit {
                return Ok(Finish::Cancelled);
            }
        }
    }

    fn submit(&self, name: &str) -> State {
        match self.engine.pattern(name) {
            Ok(pattern) => State::Scanning { pattern },
            Err(err) => error_state(&err),
        }
    }
}

fn error_state(err: &Error) -> State {
    debug_assert!(err.is_input_error());
    State::Error {
        message: err.to_string(),
    }
}
