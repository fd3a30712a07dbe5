//! Lookup of OS-level configuration values (`getconf` keys).

use crate::error::{Error, Result};
use log::debug;
use std::env;
use std::process::Command;

/// Prefix of environment variables that override an OS configuration lookup.
pub const ENV_OVERRIDE_PREFIX: &str = "IPURGE_";

/// Source of OS configuration values such as `DARWIN_USER_CACHE_DIR`.
pub trait ConfSource {
    fn lookup(&self, key: &str) -> Result<String>;
}

/// Queries values through the system `getconf` utility.
#[derive(Debug, Clone, Copy, Default)]
pub struct Getconf;

impl ConfSource for Getconf {
    fn lookup(&self, key: &str) -> Result<String> {
        let output = Command::new("getconf")
            .arg(key)
            .output()
            .map_err(|source| Error::ConfLookup {
                key: key.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::ConfValue {
                key: key.to_string(),
                message: if stderr.is_empty() {
                    format!("getconf exited with {}", output.status)
                } else {
                    stderr
                },
            });
        }

        non_empty(key, String::from_utf8_lossy(&output.stdout).as_ref())
    }
}

/// Checks `IPURGE_<KEY>` in the environment before falling back to `inner`.
pub struct EnvOverride<S> {
    inner: S,
    get: Box<dyn Fn(&str) -> Option<String>>,
}

impl<S: ConfSource> EnvOverride<S> {
    pub fn new(inner: S) -> Self {
        Self::with_getter(inner, |key| env::var(key).ok())
    }

    pub fn with_getter(inner: S, get: impl Fn(&str) -> Option<String> + 'static) -> Self {
        Self {
            inner,
            get: Box::new(get),
        }
    }
}

impl<S: ConfSource> ConfSource for EnvOverride<S> {
    fn lookup(&self, key: &str) -> Result<String> {
        let env_key = format!("{ENV_OVERRIDE_PREFIX}{key}");
        match (self.get)(&env_key) {
            Some(value) if !value.trim().is_empty() => {
                debug!("{key} taken from {env_key}");
                non_empty(key, &value)
            }
            _ => self.inner.lookup(key),
        }
    }
}

fn non_empty(key: &str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        Err(Error::ConfValue {
            key: key.to_string(),
            message: "empty value".to_string(),
        })
    } else {
        Ok(value.to_string())
    }
}
