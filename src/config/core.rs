use crate::find::{MatchOptions, WalkOptions};
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

pub const ENV_PREFIX: &str = "FINDMATCH_";

/// Typed view of the merged configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root for unrooted patterns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_root: Option<String>,
    pub walk: WalkOptions,
    #[serde(rename = "match")]
    pub matching: MatchOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

pub struct FindMatchConfig {
    figment: Figment,
}

impl FindMatchConfig {
    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // A custom config replaces the user and repository layers
        if let Some(custom_path) = custom_config {
            figment = match custom_path.rsplit('.').next() {
                Some("json") => figment.merge(Json::file(custom_path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(custom_path)),
                _ => figment.merge(Toml::file(custom_path)),
            };
        } else {
            let user = Self::user_config_dir();
            figment = figment
                .merge(Toml::file(format!("{user}/config.toml")))
                .merge(Json::file(format!("{user}/config.json")))
                .merge(Yaml::file(format!("{user}/config.yaml")))
                .merge(Yaml::file(format!("{user}/config.yml")))
                .merge(Toml::file("findmatch.toml"))
                .merge(Json::file("findmatch.json"))
                .merge(Yaml::file("findmatch.yaml"))
                .merge(Yaml::file("findmatch.yml"));
        }

        // Environment variables always win
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(FindMatchConfig { figment })
    }

    /// Extract the walk and match defaults
    pub fn settings(&self) -> Result<Settings> {
        self.figment.extract().context("Invalid findmatch configuration")
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        Ok(self.figment.extract()?)
    }

    /// Render the effective settings, with defaults filled in
    pub fn export(&self, format: ConfigFormat) -> Result<String> {
        let settings = self.settings()?;
        match format {
            ConfigFormat::Json => Ok(serde_json::to_string_pretty(&settings)?),
            ConfigFormat::Toml => Ok(toml::to_string_pretty(&settings)?),
            ConfigFormat::Yaml => Ok(serde_yml::to_string(&settings)?),
        }
    }

    fn user_config_dir() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/findmatch"),
            Err(_) => "~/.config/findmatch".to_string(),
        }
    }
}
