pub mod cli;
pub mod purge;
pub mod scan;
pub mod workflow;
