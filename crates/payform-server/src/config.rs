// File: src/config.rs
// Purpose: Configuration parsing from payform.toml

use anyhow::{Context, Result};
use payform_core::{FormCopy, PageOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file, overridable with `PAYFORM_CONFIG`
pub const DEFAULT_CONFIG_PATH: &str = "payform.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub page: PageConfig,

    /// Overrides for labels and error messages
    #[serde(default)]
    pub copy: FormCopy,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// wasm-pack output directory, served under /pkg
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,

    /// Served under /static
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Page shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub stylesheet: Option<String>,
}

// Default values
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_pkg_dir() -> String {
    "pkg".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_title() -> String {
    "Payment".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            pkg_dir: default_pkg_dir(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            stylesheet: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load from `PAYFORM_CONFIG` or ./payform.toml, then apply `PORT`
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("PAYFORM_CONFIG").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// `from_env` with the variable values passed in
    pub fn from_vars(config_path: Option<String>, port: Option<String>) -> Result<Self> {
        let path = config_path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load(&path)?;

        if let Some(port) = port {
            config.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {:?}", port))?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.page.title.clone(),
            stylesheet: self.page.stylesheet.clone(),
            ..PageOptions::default()
        }
    }
}
