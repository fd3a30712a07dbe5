use crate::engine::DeletionResult;
use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// State tag of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Input,
    Scanning,
    Selecting,
    Confirm,
    Done,
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Input => "INPUT",
            Phase::Scanning => "SCANNING",
            Phase::Selecting => "SELECTING",
            Phase::Confirm => "CONFIRM",
            Phase::Done => "DONE",
            Phase::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// One line of the candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub path: &'a Path,
    pub selected: bool,
}

/// Snapshot handed to the presentation layer after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    Input {
        text: &'a str,
    },
    Scanning {
        name: &'a str,
    },
    Selecting {
        rows: Vec<Row<'a>>,
        cursor: usize,
    },
    Confirm {
        selection: &'a [PathBuf],
    },
    Done {
        results: &'a [DeletionResult],
    },
    Error {
        message: &'a str,
    },
}

impl View<'_> {
    pub fn phase(&self) -> Phase {
        match self {
            View::Input { .. } => Phase::Input,
            View::Scanning { .. } => Phase::Scanning,
            View::Selecting { .. } => Phase::Selecting,
            View::Confirm { .. } => Phase::Confirm,
            View::Done { .. } => Phase::Done,
            View::Error { .. } => Phase::Error,
        }
    }
}

/// Rendering sink.
pub trait Render {
    fn render(&mut self, view: &View<'_>) -> Result<()>;
}

/// Source of user events.
pub trait Frontend {
    fn next_event(&mut self, view: &View<'_>) -> Result<super::Event>;
}
