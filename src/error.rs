use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to query OS configuration value '{key}': {source}"))]
    ConfLookup { key: String, source: std::io::Error },

    #[snafu(display("OS configuration value '{key}' is unavailable: {message}"))]
    ConfValue { key: String, message: String },

    #[snafu(display("Invalid scan root '{}': {message}", path.display()))]
    InvalidRoot { path: PathBuf, message: String },

    #[snafu(display("Failed to read config file '{}': {source}", path.display()))]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse config file '{}': {source}", path.display()))]
    ConfigFileParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[snafu(display("You need to pass a program name."))]
    EmptyName,

    #[snafu(display("You need to select at least one file path."))]
    NothingSelected,

    #[snafu(display("Invalid pattern '{pattern}': {source}"))]
    InvalidPattern {
        pattern: String,
        source: Box<regex::Error>,
    },

    #[snafu(display("Prompt failed: {message}"))]
    Prompt { message: String },

    #[snafu(display(
        "{action} requires interactive input. Hint: rerun without --non-interactive or supply --name."
    ))]
    NonInteractive { action: String },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    #[snafu(display("JSON serialization error: {source}"))]
    Json { source: serde_json::Error },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json { source: error }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(error: dialoguer::Error) -> Self {
        Error::Prompt {
            message: error.to_string(),
        }
    }
}

impl Error {
    pub fn non_interactive(action: &str) -> Self {
        Error::NonInteractive {
            action: action.to_string(),
        }
    }

    /// Errors the workflow recovers from by routing to its error screen.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyName | Error::NothingSelected | Error::InvalidPattern { .. }
        )
    }
}
