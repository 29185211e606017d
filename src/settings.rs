// src/settings.rs
use anyhow::{Result, Context};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "nexus-intel";
pub const ENV_PREFIX: &str = "NEXUS";
pub const CONFIG_PATH_ENV: &str = "NEXUS_CONFIG";

const API_KEY_FALLBACK_ENVS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub log_filter: String,
    pub insight: InsightSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InsightSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CatalogSettings {
    /// RON catalog to use instead of the built-in seed products
    pub seed_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "nexus_intel=info".to_string(),
            insight: InsightSettings::default(),
            catalog: CatalogSettings::default(),
        }
    }
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key: None,
        }
    }
}

impl InsightSettings {
    /// Configured key, else the first of `GEMINI_API_KEY` / `API_KEY` that is non-empty.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let non_empty = |k: &String| !k.trim().is_empty();
        self.api_key.clone().filter(non_empty).or_else(|| {
            API_KEY_FALLBACK_ENVS
                .iter()
                .find_map(|name| lookup(*name).filter(non_empty))
        })
    }
}

impl Settings {
    /// Per-user settings file, e.g. `~/.config/nexus-intel/settings.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("settings.toml"))
    }

    /// Defaults, then the per-user file, then `$NEXUS_CONFIG`, then
    /// `NEXUS__*` environment variables.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load_from(Self::default_path().as_deref(), explicit.as_deref())
    }

    pub fn load_from(user_file: Option<&Path>, explicit_file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = user_file {
            builder = builder.add_source(config::File::from(path.to_path_buf()).required(false));
        }
        if let Some(path) = explicit_file {
            builder = builder.add_source(config::File::from(path.to_path_buf()).required(true));
        }

        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}
