use crate::config::conf::{ConfSource, EnvOverride, Getconf};
use crate::config::roots::{RootMap, resolve_roots};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of the optional `config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Treat the program name as a regular expression instead of literal text
    #[serde(default)]
    pub regex: bool,
    /// Extra roots scanned after the built-in ones
    #[serde(default)]
    pub roots: Vec<RootEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RootEntry {
    pub path: PathBuf,
    pub max_depth: usize,
}

impl Settings {
    pub fn from_toml(path: &Path, raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|source| Error::ConfigFileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_roots(&self, roots: &mut RootMap) -> Result<()> {
        for entry in &self.roots {
            roots.insert(&entry.path, entry.max_depth)?;
        }
        Ok(())
    }
}

/// Inputs gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigRequest {
    pub config_path: Option<PathBuf>,
    pub regex: bool,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub roots: RootMap,
    pub regex: bool,
    pub config_path: Option<PathBuf>,
}

/// Resolve scan roots and matching options for this process.
pub fn resolve(request: ConfigRequest) -> Result<ResolvedConfig> {
    let home = directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| Error::ConfValue {
            key: "HOME".to_string(),
            message: "cannot determine the home directory".to_string(),
        })?;
    resolve_with(request, &home, &EnvOverride::new(Getconf))
}

pub fn resolve_with(
    request: ConfigRequest,
    home: &Path,
    conf: &dyn ConfSource,
) -> Result<ResolvedConfig> {
    let mut roots = resolve_roots(home, conf)?;

    let (settings, config_path) = match request.config_path {
        Some(path) => (load_settings(&path)?, Some(path)),
        None => match default_config_path() {
            Some(path) if path.exists() => (load_settings(&path)?, Some(path)),
            _ => (Settings::default(), None),
        },
    };
    settings.apply_roots(&mut roots)?;

    debug!(
        "resolved {} scan roots (config file: {:?})",
        roots.len(),
        config_path
    );

    Ok(ResolvedConfig {
        roots,
        regex: request.regex || settings.regex,
        config_path,
    })
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Settings::from_toml(path, &raw)
}

/// `~/.config/ipurge/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|base_dirs| {
        base_dirs
            .home_dir()
            .join(".config")
            .join("ipurge")
            .join("config.toml")
    })
}
