use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CART_KEY: &str = "tato_cart";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Start in dark mode
    #[serde(default)]
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// How long the order confirmation stays up before closing itself
    #[serde(default = "default_confirmation_delay_ms")]
    pub confirmation_delay_ms: u64,
}

impl CheckoutConfig {
    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            confirmation_delay_ms: default_confirmation_delay_ms(),
        }
    }
}

fn default_confirmation_delay_ms() -> u64 {
    tato_engine::DEFAULT_CONFIRMATION_DELAY.as_millis() as u64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage key holding the serialized cart
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_key: default_cart_key(),
        }
    }
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `config.toml` inside the data directory
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}
