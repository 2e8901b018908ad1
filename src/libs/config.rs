//! Configuration management for the tutordesk application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and loaded with sensible defaults when no file exists, so the
//! service runs without any prior setup. An interactive wizard (`init`
//! command) writes the file for users who want to pin the listen address.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\tutordesk\config.json`
//! - **macOS**: `~/Library/Application Support/tutordesk/config.json`
//! - **Linux**: `~/.local/share/tutordesk/config.json`

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// HTTP server binding configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Host address the HTTP server binds to.
    pub host: String,
    /// TCP port the HTTP server binds to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Top-level application configuration.
///
/// Every section is optional; a missing section means defaults apply. This
/// mirrors how the configuration file is expected to be hand-edited: users
/// add only the sections they care about.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns a default configuration when no file exists, so a fresh
    /// installation works without running `init` first.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Existing values are offered as defaults so re-running the wizard
    /// only changes what the user actually edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let default = config.server.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleServer);
        config.server = Some(ServerConfig {
            host: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerHost.to_string())
                .default(default.host)
                .interact_text()?,
            port: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptServerPort.to_string())
                .default(default.port)
                .interact_text()?,
        });

        Ok(config)
    }

    /// Resolved server section, falling back to defaults.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
}
