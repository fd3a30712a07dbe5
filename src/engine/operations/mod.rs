// Engine operation traits and implementations
pub mod purge;
pub mod scan;

pub use purge::{DeletionResult, FsPurger, Outcome, Purger};
pub use scan::{Candidate, Scanner, WalkDirScanner};
