//! # Application Configuration
//!
//! This module defines the configuration structure for the `faqchat-server` and
//! provides the logic for loading it from a `config.yml` file and environment
//! variables.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use faqchat::{constants::API_KEY_ENV, ChatConfig, DigestOptions, Language};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The chat-completion endpoint, model, temperature and credential.
    #[serde(default)]
    pub chat: ChatConfig,
    /// One FAQ corpus file per language.
    #[serde(default = "default_corpora")]
    pub corpora: HashMap<Language, String>,
    /// How the FAQ digest inside the system prompt is laid out.
    #[serde(default)]
    pub digest: DigestOptions,
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    9090
}

/// Provides the default corpus locations, relative to the working directory.
fn default_corpora() -> HashMap<Language, String> {
    Language::ALL
        .into_iter()
        .map(|lang| (lang, format!("data/faq.{lang}.json")))
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            chat: ChatConfig::default(),
            corpora: default_corpora(),
            digest: DigestOptions::default(),
        }
    }
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// - An explicit `config_path_override` must exist; otherwise `config.yml` in
///   the working directory is used when present.
/// - `${VAR}` references inside the file are substituted from the environment.
/// - Top-level keys like `port` are overridden by `PORT`.
/// - Nested keys are overridden by `FAQCHAT_...` variables (e.g. `FAQCHAT_CHAT__MODEL`).
/// - When no credential is configured, `OPENAI_API_KEY` is used.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    match config_path_override {
        Some(path) => {
            let content = read_and_substitute(path)?.ok_or_else(|| {
                ConfigError::NotFound(format!("Config file not found at '{path}'."))
            })?;
            info!("Loading configuration from '{path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None => {
            if let Some(content) = read_and_substitute("config.yml")? {
                info!("Loading configuration from 'config.yml'.");
                builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
            } else {
                info!("'config.yml' not found. Using built-in defaults.");
            }
        }
    }

    let settings = builder
        // Load environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Load prefixed environment variables for deeper overrides.
        .add_source(
            Environment::with_prefix("FAQCHAT")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // After all layers, fall back to the conventional credential variable so a
    // plain `.env` with OPENAI_API_KEY is enough.
    if config.chat.api_key().is_none() {
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.chat.api_key = Some(key);
            }
        }
    }

    Ok(config)
}
