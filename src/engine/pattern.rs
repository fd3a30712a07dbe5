use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// How user input is turned into a matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatternMode {
    /// Input is matched as literal text
    #[default]
    Literal,
    /// Input is compiled as a regular expression
    Regex,
}

/// Unanchored, case-insensitive matcher built from a program name.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    name: String,
    regex: Regex,
}

impl MatchPattern {
    pub fn new(input: &str, mode: PatternMode) -> Result<Self> {
        let name = input.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let expr = match mode {
            PatternMode::Literal => regex::escape(name),
            PatternMode::Regex => name.to_string(),
        };
        let regex = RegexBuilder::new(&expr)
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: name.to_string(),
                source: Box::new(source),
            })?;

        Ok(Self {
            name: name.to_string(),
            regex,
        })
    }

    pub fn literal(input: &str) -> Result<Self> {
        Self::new(input, PatternMode::Literal)
    }

    /// The trimmed input the pattern was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}
