//! Configuration management for paydesk.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). Every section is optional so
//! the binary runs with defaults before `paydesk init` has been executed.
//!
//! ## Sections
//!
//! - **server**: backend base URL and the delay before the single
//!   authentication retry
//! - **cache**: freshness window of the in-memory response cache
//! - **listing**: default page size for list views
//!
//! The backend access token is not part of this file; it is kept encrypted
//! by [`crate::libs::secret::Secret`].
//!
//! ## Environment Overrides
//!
//! `PAYDESK_API_URL` replaces the configured server URL. A `.env` file in the
//! working directory is loaded at startup, so the override can live there.
//!
//! ```rust,no_run
//! use paydesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}", config.server_or_default().api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const API_URL_ENV: &str = "PAYDESK_API_URL";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the back-office API, without a trailing slash.
    pub api_url: String,

    /// Milliseconds to wait before retrying a request rejected because
    /// authentication was not ready yet.
    #[serde(default = "default_auth_retry_delay_ms")]
    pub auth_retry_delay_ms: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CacheConfig {
    /// Seconds a cached list response stays fresh.
    pub ttl_secs: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListingConfig {
    pub per_page: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<ListingConfig>,
}

fn default_auth_retry_delay_ms() -> u64 {
    1000
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            api_url: "http://localhost:3000/api".to_string(),
            auth_retry_delay_ms: default_auth_retry_delay_ms(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig { ttl_secs: 120 }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig { per_page: 25 }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists,
    /// and applies environment overrides.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let mut config = if config_file_path.exists() {
            let config_str = fs::read_to_string(&config_file_path)?;
            serde_json::from_str(&config_str)
                .with_context(|| format!("{}: {}", Message::ConfigInvalid, config_file_path.display()))?
        } else {
            Config::default()
        };

        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                let mut server = config.server.clone().unwrap_or_default();
                server.api_url = url.trim().trim_end_matches('/').to_string();
                config.server = Some(server);
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn server_or_default(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn cache_or_default(&self) -> CacheConfig {
        self.cache.clone().unwrap_or_default()
    }

    pub fn listing_or_default(&self) -> ListingConfig {
        self.listing.clone().unwrap_or_default()
    }

    /// Interactive setup wizard over the selected sections.
    pub fn init() -> Result<Self> {
        let mut config = Self::read()?;

        let modules = [
            ConfigModule {
                key: "server".to_string(),
                name: "Server".to_string(),
            },
            ConfigModule {
                key: "cache".to_string(),
                name: "Cache".to_string(),
            },
            ConfigModule {
                key: "listing".to_string(),
                name: "Listing".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    let api_url: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptServerApiUrl.to_string())
                        .default(default.api_url)
                        .interact_text()?;
                    config.server = Some(ServerConfig {
                        api_url: api_url.trim().trim_end_matches('/').to_string(),
                        auth_retry_delay_ms: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAuthRetryDelay.to_string())
                            .default(default.auth_retry_delay_ms)
                            .interact_text()?,
                    });
                }
                "cache" => {
                    let default = config.cache_or_default();
                    msg_print!(Message::ConfigModuleCache);
                    config.cache = Some(CacheConfig {
                        ttl_secs: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCacheTtl.to_string())
                            .default(default.ttl_secs)
                            .interact_text()?,
                    });
                }
                "listing" => {
                    let default = config.listing_or_default();
                    msg_print!(Message::ConfigModuleListing);
                    config.listing = Some(ListingConfig {
                        per_page: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPerPage.to_string())
                            .default(default.per_page)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
