use dialoguer::{Confirm, Input, MultiSelect};

use crate::error::{Error, Result};

fn check_length(text: &str, max_chars: usize) -> std::result::Result<(), String> {
    let count = text.trim().chars().count();
    if count > max_chars {
        Err(format!("At most {max_chars} characters, got {count}."))
    } else {
        Ok(())
    }
}

/// Interactive prompt mode for CLI operations
#[derive(Debug, Clone, Copy, Default)]
pub enum Prompt {
    /// Console-based interactive prompts using dialoguer
    #[default]
    Console,
    /// Non-interactive mode that uses defaults or fails
    NonInteractive,
}

impl Prompt {
    pub fn new(interactive: bool) -> Self {
        if interactive {
            Self::Console
        } else {
            Self::NonInteractive
        }
    }

    pub fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        match self {
            Prompt::Console => Ok(Confirm::new()
                .with_prompt(message)
                .default(default)
                .interact()?),
            Prompt::NonInteractive => Ok(default),
        }
    }

    /// Free text input of at most `max_chars` characters.
    pub fn input(&self, field: &str, initial: &str, max_chars: usize) -> Result<String> {
        match self {
            Prompt::Console => Ok(Input::<String>::new()
                .with_prompt(field)
                .with_initial_text(initial)
                .allow_empty(true)
                .validate_with(move |text: &String| check_length(text, max_chars))
                .interact_text()?),
            Prompt::NonInteractive => Err(Error::non_interactive(field)),
        }
    }

    /// Multi-choice list. `None` when the user backs out with Esc or `q`.
    pub fn multi_select(
        &self,
        message: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        match self {
            Prompt::Console => Ok(MultiSelect::new()
                .with_prompt(message)
                .items(items)
                .defaults(checked)
                .max_length(20)
                .interact_opt()?),
            Prompt::NonInteractive => Err(Error::non_interactive(message)),
        }
    }
}
