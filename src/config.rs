//! Configuration file loading with environment variable overrides.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::adapters::live::http::DEFAULT_UPSTREAM;
use crate::cli::Cli;
use crate::params::{normalize_upstream, parse_bind, validate_scale};
use crate::upscale::DEFAULT_SCALE;

/// Default listen address.
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Env var overriding the skin API base URL from the config file.
pub const UPSTREAM_ENV: &str = "SKINFACE_UPSTREAM_URL";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Skin API settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Avatar rendering settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// HTTP server settings.
#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    /// Listen address, e.g. `127.0.0.1:8080`.
    pub bind: Option<String>,
}

/// Skin API settings.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the skin API.
    pub base_url: Option<String>,
}

/// Avatar rendering settings.
#[derive(Debug, Default, Deserialize)]
pub struct RenderConfig {
    /// Upscale factor.
    pub scale: Option<u32>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the upstream base URL, preferring the environment variable.
    #[must_use]
    pub fn upstream_url(&self) -> Option<String> {
        std::env::var(UPSTREAM_ENV).ok().or_else(|| self.upstream.base_url.clone())
    }
}

/// Fully resolved, validated settings the server runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Listen address.
    pub bind: SocketAddr,
    /// Skin API base URL, without trailing slash.
    pub upstream: String,
    /// Upscale factor.
    pub scale: u32,
}

impl Settings {
    /// Merge CLI flags over the config file over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if any merged value fails validation.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, String> {
        Self::merge(cli, config, config.upstream_url())
    }

    fn merge(cli: &Cli, config: &Config, upstream: Option<String>) -> Result<Self, String> {
        let bind = cli.bind.as_deref().or(config.server.bind.as_deref()).unwrap_or(DEFAULT_BIND);
        let upstream = cli.upstream.clone().or(upstream);
        let scale = cli.scale.or(config.render.scale).unwrap_or(DEFAULT_SCALE);

        validate_scale(scale)?;
        let upstream = normalize_upstream(upstream.as_deref().unwrap_or(DEFAULT_UPSTREAM))?;
        Ok(Self { bind: parse_bind(bind)?, upstream, scale })
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `SKINFACE_CONFIG` environment variable
/// 3. `~/.config/skinface/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("SKINFACE_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/skinface/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/skinface/config.toml")
    } else {
        PathBuf::from("skinface.toml")
    }
}
