use serde::Deserialize;
use std::path::Path;

use crate::constants::{CONFIG_FILE_PATH, PRIVATE_KEYS_FILE_PATH, TOKEN_FILE_PATH};

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Config {
    pub private_keys_file: String,
    pub token_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            private_keys_file: PRIVATE_KEYS_FILE_PATH.to_string(),
            token_file: TOKEN_FILE_PATH.to_string(),
        }
    }
}

impl Config {
    async fn read_from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let cfg_str = tokio::fs::read_to_string(path).await?;
        Ok(toml::from_str(&cfg_str)?)
    }

    /// Reads `data/config.toml`, falling back to the default paths when the file is absent.
    pub async fn read_default() -> eyre::Result<Self> {
        if !tokio::fs::try_exists(CONFIG_FILE_PATH).await.unwrap_or(false) {
            tracing::info!("No config found at {CONFIG_FILE_PATH}, using default file paths");
            return Ok(Self::default());
        }

        Self::read_from_file(CONFIG_FILE_PATH)
            .await
            .map_err(|e| eyre::eyre!("Config at {CONFIG_FILE_PATH} is invalid: {e}"))
    }
}
