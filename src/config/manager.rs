use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::DEFAULT_ENDPOINT;

/// Environment variable read for the API key when `api.key_env` is not set.
pub const DEFAULT_KEY_ENV: &str = "GOOGLE_TRANSLATE_KEY";

/// Default settings in the `[gtranslate]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default target language code.
    pub to: Option<String>,
    /// Default source language code. Detected by the API when unset.
    pub from: Option<String>,
}

/// API access settings in the `[api]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key stored directly in config (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_env: Option<String>,
    /// Base URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ApiConfig {
    /// Name of the environment variable holding the key.
    pub fn key_env_name(&self) -> &str {
        self.key_env.as_deref().unwrap_or(DEFAULT_KEY_ENV)
    }

    /// Gets the API key, preferring the environment variable over the config file.
    pub fn get_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(self.key_env_name())
            && !key.is_empty()
        {
            return Some(key);
        }
        self.key.clone().filter(|k| !k.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gtranslate/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gtranslate: DefaultsConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Resolved configuration after merging CLI arguments, environment and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub access_key: String,
    pub endpoint: String,
    /// Target language; `None` is only acceptable for language listings.
    pub target_language: Option<String>,
    pub source_language: Option<String>,
}

impl ResolvedConfig {
    /// Returns the target language or an error explaining how to set one.
    pub fn require_target(&self) -> Result<&str> {
        self.target_language.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'to' (target language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: gtranslate --to <lang>\n  \
                 - Config file: ~/.config/gtranslate/config.toml"
            )
        })
    }
}

/// CLI overrides that take precedence over environment and config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub key: Option<String>,
    pub endpoint: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then environment variable (key only), then config
/// file, then built-in default.
///
/// # Errors
///
/// Returns an error if no API key can be found.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let access_key = match options.key.clone().filter(|k| !k.is_empty()) {
        Some(key) => key,
        None => match config_file.api.get_key() {
            Some(key) => key,
            None => {
                let env_var = config_file.api.key_env_name();
                bail!(
                    "Missing API key\n\n\
                     Please provide it via:\n  \
                     - CLI option: gtranslate --key <key>\n  \
                     - Environment: export {env_var}=\"your-api-key\"\n  \
                     - Config file: run 'gtranslate configure'"
                );
            }
        },
    };

    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.api.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let target_language = options
        .to
        .as_ref()
        .or(config_file.gtranslate.to.as_ref())
        .cloned();

    let source_language = options
        .from
        .as_ref()
        .or(config_file.gtranslate.from.as_ref())
        .cloned();

    Ok(ResolvedConfig {
        access_key,
        endpoint,
        target_language,
        source_language,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/gtranslate/config.toml`
    /// or `~/.config/gtranslate/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        crate::fs::atomic_write(&self.config_path, &contents)
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}
