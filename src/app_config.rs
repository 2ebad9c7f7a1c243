use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::language_utils;
use crate::translation::core::{ModelConfig, RetryPolicy};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language codes; empty means discover them from the table's
    /// output columns
    #[serde(default)]
    pub languages: Vec<String>,

    /// Number of parallel translation workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Translation config
    pub translation: TranslationConfig,
}

/// Log level setting
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: The log crate filter for this level
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service URL; empty uses the public API
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Total attempts per unit, including the first
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Fixed delay between attempts, in seconds
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

fn default_workers() -> usize {
    6
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.0
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_delay_secs() -> u64 {
    5
}

impl Default for TranslationConfig {
    fn default() -> Self {
        TranslationConfig {
            model: default_model(),
            api_key: String::new(),
            endpoint: String::new(),
            temperature: default_temperature(),
            retry_count: default_retry_count(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

impl TranslationConfig {
    /// The plain model configuration handed to workers
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            model: self.model.clone(),
            temperature: self.temperature,
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
        }
    }

    /// The retry policy for unit translation
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.retry_count,
            delay: Duration::from_secs(self.retry_delay_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            languages: Vec::new(),
            workers: default_workers(),
            log_level: LogLevel::default(),
            translation: TranslationConfig::default(),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file
    pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::default();
        let content = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config")?;
        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(anyhow!("workers must be at least 1"));
        }

        if !(0.0..=2.0).contains(&self.translation.temperature) {
            return Err(anyhow!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.translation.temperature
            ));
        }

        if self.translation.retry_count == 0 {
            return Err(anyhow!("retry_count must be at least 1"));
        }

        if self.translation.model.trim().is_empty() {
            return Err(anyhow!("model must not be empty"));
        }

        if !self.translation.endpoint.is_empty() {
            Url::parse(&self.translation.endpoint)
                .map_err(|e| anyhow!("Invalid endpoint '{}': {}", self.translation.endpoint, e))?;
        }

        for code in &self.languages {
            language_utils::validate_language_code(code)?;
        }

        Ok(())
    }
}
