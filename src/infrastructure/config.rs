use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

impl Config {
    /// Embedded defaults only; no files are read
    pub fn with_defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Defaults overlaid with the user's config file, if any
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(utils::get_config_dir(), utils::get_data_dir())
    }

    pub fn load_from(config_dir: PathBuf, data_dir: PathBuf) -> Result<Self, ConfigError> {
        let default_config = Self::with_defaults()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);
        Ok(cfg)
    }

    /// Fill in every keybinding and style the user did not override
    fn merge_defaults(&mut self, default_config: Config) {
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }
}
