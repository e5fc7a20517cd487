//! Bot configuration.
//!
//! Settings are layered, later sources taking precedence:
//! 1. Bundled defaults (`lagrange.toml` next to this crate's manifest)
//! 2. `~/.config/lagrange/lagrange.toml`
//! 3. `./lagrange.toml`, or the file given with `--config`
//! 4. `LAGRANGE_*` environment variables, nested keys joined with `__`
//!    (`LAGRANGE_DISCORD__TOKEN`, `LAGRANGE_WIDGET__TIMEOUT_SECS`)

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use lagrange_error::{ConfigError, LagrangeResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

const DEFAULT_CONFIG: &str = include_str!("../lagrange.toml");

const ENV_PREFIX: &str = "LAGRANGE";

const REDACTED: &str = "<redacted>";

/// Discord connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DiscordConfig {
    /// Bot token from the Discord Developer Portal
    token: String,
}

/// waifu.im settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WaifuConfig {
    /// API access token
    token: String,
    /// API base URL
    base_url: String,
}

/// Rating widget settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct WidgetConfig {
    /// Seconds without interaction before the buttons are removed
    timeout_secs: u64,
}

/// Complete bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LagrangeConfig {
    /// Discord connection
    discord: DiscordConfig,
    /// Image catalog
    waifu: WaifuConfig,
    /// Rating widget
    widget: WidgetConfig,
}

impl LagrangeConfig {
    /// Loads configuration from all layers, using the process environment.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lagrange::LagrangeConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = LagrangeConfig::load(None)?;
    /// config.validate()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: Option<&Path>) -> LagrangeResult<Self> {
        Self::load_layers(path, true, None)
    }

    /// Loads configuration with explicit control over the layers.
    ///
    /// * `path` - config file to use instead of `./lagrange.toml`; must exist
    /// * `user_files` - whether to read the home and working directory files
    /// * `env` - environment to read overrides from; `None` uses the process environment
    pub fn load_layers(
        path: Option<&Path>,
        user_files: bool,
        env: Option<HashMap<String, String>>,
    ) -> LagrangeResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if user_files {
            if let Some(home) = dirs::home_dir() {
                let home_config = home.join(".config/lagrange/lagrange.toml");
                builder = builder.add_source(File::from(home_config).required(false));
            }
        }

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None if user_files => {
                builder.add_source(File::with_name("lagrange").required(false))
            }
            None => builder,
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }

    /// Checks that the bot can start with these settings.
    ///
    /// # Errors
    ///
    /// Fails on an empty token or base URL, or a zero widget timeout.
    pub fn validate(&self) -> LagrangeResult<()> {
        if self.discord.token.trim().is_empty() {
            return Err(
                ConfigError::new("discord.token must be set (LAGRANGE_DISCORD__TOKEN)").into(),
            );
        }
        if self.waifu.token.trim().is_empty() {
            return Err(
                ConfigError::new("waifu.token must be set (LAGRANGE_WAIFU__TOKEN)").into(),
            );
        }
        if self.waifu.base_url.trim().is_empty() {
            return Err(ConfigError::new("waifu.base_url must not be empty").into());
        }
        if self.widget.timeout_secs == 0 {
            return Err(ConfigError::new("widget.timeout_secs must be greater than 0").into());
        }
        Ok(())
    }

    /// Widget inactivity period.
    pub fn widget_timeout(&self) -> Duration {
        Duration::from_secs(self.widget.timeout_secs)
    }

    /// Copy with tokens masked, for display.
    pub fn redacted(&self) -> Self {
        let mask = |token: &str| {
            if token.is_empty() {
                String::new()
            } else {
                REDACTED.to_string()
            }
        };

        let mut copy = self.clone();
        copy.discord.token = mask(&self.discord.token);
        copy.waifu.token = mask(&self.waifu.token);
        copy
    }
}
