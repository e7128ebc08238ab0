use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::config::{keybindings::KeyBindings, styles::Styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    /// Ticks per second; the command line flag wins when given
    #[serde(default)]
    pub tick_rate: Option<f64>,
    /// Frames per second; the command line flag wins when given
    #[serde(default)]
    pub frame_rate: Option<f64>,
}

impl Config {
    /// Built-in configuration shipped with the binary
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load user configuration from the config directory and fill in defaults.
    ///
    /// Every config file is optional; without one the built-in defaults apply.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config);

        Ok(cfg)
    }

    /// Fill in every keybinding and style the user did not set
    pub fn merge_defaults(&mut self, defaults: Config) {
        for (keyseq, action) in defaults.keybindings.0 {
            self.keybindings.entry(keyseq).or_insert(action);
        }
        for (style_key, style) in defaults.styles.0 {
            self.styles.entry(style_key).or_insert(style);
        }
        if self.tick_rate.is_none() {
            self.tick_rate = defaults.tick_rate;
        }
        if self.frame_rate.is_none() {
            self.frame_rate = defaults.frame_rate;
        }
    }
}
