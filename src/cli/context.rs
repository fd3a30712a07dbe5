use crate::config::loader::{ConfigRequest, ResolvedConfig, resolve};
use crate::engine::PurgeEngine;
use crate::error::{Error, Result};
use crate::utils::OutputFormat;

use super::entry::Args;
use super::prompts::Prompt;

pub struct CliContext {
    args: Args,
    resolved: ResolvedConfig,
    prompt: Prompt,
}

impl CliContext {
    pub fn from_args(args: Args, prompt: Prompt) -> Result<Self> {
        let request = ConfigRequest {
            config_path: args.config.clone(),
            regex: args.regex,
        };

        let resolved = resolve(request)?;

        Ok(Self {
            args,
            resolved,
            prompt,
        })
    }

    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }

    pub fn name(&self) -> Option<&str> {
        self.args.name.as_deref()
    }

    pub fn format(&self) -> OutputFormat {
        self.args.format
    }

    pub fn is_non_interactive(&self) -> bool {
        self.args.non_interactive
    }

    pub fn ensure_name(&self, action: &str) -> Result<&str> {
        self.name().ok_or_else(|| Error::non_interactive(action))
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn engine(&self) -> PurgeEngine {
        PurgeEngine::from_config(&self.resolved)
    }
}
