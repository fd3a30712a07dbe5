//! ipurge: find and delete the files an uninstalled program left behind.
//!
//! Paths under a fixed set of system directories are matched against a program
//! name, the user picks which to remove, and the selection is deleted after
//! confirmation.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod utils;
pub mod workflow;
