//! Configuration management for the attendance lookup.
//!
//! Holds the location of the spreadsheet script that serves attendance data
//! and the list of translation endpoints used for remarks. Every value has
//! a working default, so the application runs without any setup.
//!
//! ## Configuration Structure
//!
//! - **Upstream Config**: Script host, script deployment ID, request timeout
//! - **Translation Config**: LibreTranslate endpoints, cache size, request timeout
//!
//! ## Sources
//!
//! Values are resolved in this order, later sources winning:
//!
//! 1. Built-in defaults
//! 2. `config.json` in the platform data directory
//! 3. `ALMURAQIB_API_URL` / `ALMURAQIB_SCRIPT_ID` environment variables
//!    (a `.env` file is loaded by `main`)
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use almuraqib::libs::config::Config;
//!
//! let config = Config::read()?.with_env_overrides();
//! println!("Script: {}", config.upstream.script_id);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::translator::DEFAULT_CACHE_CAPACITY;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_API_URL: &str = "ALMURAQIB_API_URL";
pub const ENV_SCRIPT_ID: &str = "ALMURAQIB_SCRIPT_ID";

const DEFAULT_API_URL: &str = "https://script.google.com";
const DEFAULT_SCRIPT_ID: &str = "AKfycbx_XTWnCkdoay0HA_Kr7GTQGVInCLsRR467Z6kvz2R9pCYZyX5x1Z_JJl2tP323joCD";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Represents a configurable module in the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Where attendance data comes from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Host of the script deployment, without trailing path.
    pub api_url: String,

    /// Deployment ID of the attendance script.
    pub script_id: String,

    /// Request timeout in seconds. `None` leaves the transport default.
    pub timeout_secs: Option<u64>,
}

/// One translation endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EndpointConfig {
    pub name: String,
    pub url: String,
}

impl EndpointConfig {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_owned(),
            url: url.to_owned(),
        }
    }
}

/// Translation of free-text remarks.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TranslationConfig {
    /// Endpoints tried in order, one pass per request.
    pub endpoints: Vec<EndpointConfig>,

    /// Maximum number of cached translations.
    pub cache_capacity: usize,

    /// Per-request timeout in seconds. `None` leaves the transport default.
    pub timeout_secs: Option<u64>,
}

/// Root configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub translation: TranslationConfig,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            api_url: DEFAULT_API_URL.to_string(),
            script_id: DEFAULT_SCRIPT_ID.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for TranslationConfig {
    /// The three public LibreTranslate instances, a 512-entry cache and a
    /// 10 second timeout so one hung instance does not stall the whole chain.
    fn default() -> Self {
        TranslationConfig {
            endpoints: vec![
                EndpointConfig::new("LibreTranslate DE", "https://libretranslate.de/translate"),
                EndpointConfig::new("LibreTranslate Argos", "https://translate.argosopentech.com/translate"),
                EndpointConfig::new("LibreTranslate FortyTwo", "https://translate.fortytwo-it.com/translate"),
            ],
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            timeout_secs: Some(10),
        }
    }
}

impl Config {
    /// Path of the configuration file in the platform data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Reads the configuration, falling back to defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Applies `ALMURAQIB_API_URL` and `ALMURAQIB_SCRIPT_ID` when set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(api_url) = env::var(ENV_API_URL).ok().filter(|v| !v.is_empty()) {
            self.upstream.api_url = api_url;
        }
        if let Some(script_id) = env::var(ENV_SCRIPT_ID).ok().filter(|v| !v.is_empty()) {
            self.upstream.script_id = script_id;
        }
        self
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults. Only the modules the user
    /// selects are prompted for.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "upstream".to_string(),
                name: Message::ConfigModuleUpstream.to_string(),
            },
            ConfigModule {
                key: "translation".to_string(),
                name: Message::ConfigModuleTranslation.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "upstream" => {
                    let default = config.upstream.clone();
                    msg_print!(Message::ConfigModuleUpstream);
                    config.upstream = UpstreamConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        script_id: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptScriptId.to_string())
                            .default(default.script_id)
                            .interact_text()?,
                        timeout_secs: Some(
                            Input::with_theme(&ColorfulTheme::default())
                                .with_prompt(Message::PromptTimeout.to_string())
                                .default(default.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
                                .interact_text()?,
                        ),
                    };
                }
                "translation" => {
                    let default = config.translation.clone();
                    msg_print!(Message::ConfigModuleTranslation);
                    let urls: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptEndpoints.to_string())
                        .default(default.endpoints.iter().map(|e| e.url.as_str()).collect::<Vec<_>>().join(","))
                        .interact_text()?;
                    config.translation = TranslationConfig {
                        endpoints: parse_endpoint_list(&urls),
                        cache_capacity: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCacheCapacity.to_string())
                            .default(default.cache_capacity)
                            .interact_text()?,
                        timeout_secs: default.timeout_secs,
                    };
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Splits a comma-separated URL list into endpoints named after their host.
pub fn parse_endpoint_list(urls: &str) -> Vec<EndpointConfig> {
    urls.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| {
            let host = url.split("://").nth(1).unwrap_or(url).split('/').next().unwrap_or(url);
            EndpointConfig::new(host, url)
        })
        .collect()
}
