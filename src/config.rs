//! Process-wide configuration: gateway origin and per-module URL overrides.
//!
//! Read once at startup and passed by reference; nothing here is global.

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::registry::{list_modules, ModuleDescriptor, ModuleId, GATEWAY_KEY};

pub const BIND_ENV: &str = "RESEARCH_CONSOLE_BIND";
pub const ORIGIN_ENV: &str = "RESEARCH_CONSOLE_ORIGIN";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Where a configuration value came from: "env" | "env-empty" | "unset".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ValueSource {
    Env,
    EnvEmpty,
    Unset,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Env => "env",
            ValueSource::EnvEmpty => "env-empty",
            ValueSource::Unset => "unset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Setting {
    value: String,
    source: ValueSource,
}

impl Setting {
    fn read(raw: Option<String>) -> Setting {
        match raw {
            Some(v) => {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    Setting {
                        value: String::new(),
                        source: ValueSource::EnvEmpty,
                    }
                } else {
                    Setting {
                        value: trimmed.to_string(),
                        source: ValueSource::Env,
                    }
                }
            }
            None => Setting {
                value: String::new(),
                source: ValueSource::Unset,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    gateway: Setting,
    overrides: BTreeMap<ModuleId, Setting>,
}

impl ShellConfig {
    /// Build from an arbitrary key lookup (environment, map, ...).
    pub fn from_lookup<F>(lookup: F) -> ShellConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let gateway = Setting::read(lookup(GATEWAY_KEY));
        let overrides = list_modules()
            .iter()
            .map(|m| (m.id, Setting::read(lookup(m.config_key))))
            .collect();
        ShellConfig { gateway, overrides }
    }

    /// Load `.env` from the working directory (if any), then read the process environment.
    /// Variables already present in the environment take precedence over the file.
    pub fn from_env() -> ShellConfig {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("ignoring unreadable .env file: {e}"),
        }
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Like `from_env`, but reads a specific dotenv file instead of searching for `.env`.
    pub fn from_env_file(path: &Path) -> std::io::Result<ShellConfig> {
        dotenvy::from_path(path).map_err(|e| match e {
            dotenvy::Error::Io(ioe) => ioe,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        })?;
        Ok(Self::from_lookup(|k| env::var(k).ok()))
    }

    /// Configured gateway, if any (trimmed, non-empty).
    pub fn gateway(&self) -> Option<&str> {
        Some(self.gateway.value.as_str()).filter(|s| !s.is_empty())
    }

    pub fn gateway_source(&self) -> ValueSource {
        self.gateway.source
    }

    /// Gateway, falling back to the page origin.
    pub fn gateway_or<'a>(&'a self, page_origin: &'a str) -> &'a str {
        self.gateway().unwrap_or(page_origin)
    }

    /// Raw override for a module; empty when unset.
    pub fn override_for(&self, id: ModuleId) -> &str {
        self.overrides
            .get(&id)
            .map(|s| s.value.as_str())
            .unwrap_or_default()
    }

    pub fn override_source(&self, id: ModuleId) -> ValueSource {
        self.overrides
            .get(&id)
            .map(|s| s.source)
            .unwrap_or(ValueSource::Unset)
    }

    /// Config keys of modules without an explicit override.
    pub fn unset_keys(&self) -> Vec<&'static str> {
        list_modules()
            .iter()
            .filter(|m: &&ModuleDescriptor| self.override_for(m.id).is_empty())
            .map(|m| m.config_key)
            .collect()
    }
}

/// Bind address for `serve`: flag, then `RESEARCH_CONSOLE_BIND`, then the default.
pub fn bind_address(flag: Option<&str>) -> String {
    flag.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            env::var(BIND_ENV)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_BIND.to_string())
}

/// Page origin for commands that run outside a browser request.
pub fn page_origin(flag: Option<&str>) -> String {
    flag.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            env::var(ORIGIN_ENV)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_ORIGIN.to_string())
}
