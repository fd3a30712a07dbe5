pub mod console;
pub mod context;
pub mod entry;
pub mod prompts;

pub use console::{ConsoleFrontend, ConsoleRenderer};
pub use context::CliContext;
pub use entry::{Args, run};
pub use prompts::Prompt;
