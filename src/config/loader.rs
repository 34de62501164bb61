use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use bon::Builder;
use colored::control::ShouldColorize;
use derive_more::Display;
use log::info;
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Margin, Rotate, Style},
};

use crate::common::{PROJECT_NAME, PROJECT_VERSION, project_config_dir};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// When prompts emit ANSI styling.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow `NO_COLOR` / `CLICOLOR` / `CLICOLOR_FORCE` and whether stdout is a tty
    #[default]
    #[display("auto")]
    Auto,
    #[display("always")]
    Always,
    #[display("never")]
    Never,
}

impl ColorMode {
    /// Resolves the mode to the single on/off flag used by the formatter set.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => ShouldColorize::from_env().should_colorize(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Characters drawn by the prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct Glyphs {
    /// Marker before the prompt text while the prompt is open
    #[builder(into, default = "?".to_string())]
    pub prompt: String,
    /// Marker on the completion line after a submission
    #[builder(into, default = "✔".to_string())]
    pub completed: String,
    /// Marker on the completion line after a cancellation
    #[builder(into, default = "✖".to_string())]
    pub failed: String,
    /// Pointer in front of the active select entry
    #[builder(into, default = "❯".to_string())]
    pub pointer: String,
    /// Fill of a checked checkbox
    #[builder(into, default = "■".to_string())]
    pub checked: String,
    /// Substitute for every character of sensitive input
    #[builder(default = '*')]
    pub mask: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color: ColorMode,
    pub glyphs: Glyphs,
    /// Debug level logging
    pub debug: bool,
}

#[derive(Tabled)]
struct ConfigDisplay<'a> {
    color: ColorMode,
    debug: bool,
    prompt: &'a str,
    completed: &'a str,
    failed: &'a str,
    pointer: &'a str,
    checked: &'a str,
    mask: char,
}

impl<'a> From<&'a Config> for ConfigDisplay<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            color: config.color,
            debug: config.debug,
            prompt: &config.glyphs.prompt,
            completed: &config.glyphs.completed,
            failed: &config.glyphs.failed,
            pointer: &config.glyphs.pointer,
            checked: &config.glyphs.checked,
            mask: config.glyphs.mask,
        }
    }
}

impl Config {
    pub(crate) fn load_existing(config_file: &Path) -> Result<Self> {
        let config_string = fs::read_to_string(config_file)
            .with_context(|| format!("Unable to read {}", config_file.display()))?;

        let config: Config = serde_json::from_str(&config_string)
            .with_context(|| format!("Unable to deserialize {}", config_file.display()))?;

        Ok(config)
    }

    pub(crate) fn load_from(config_file: &Path) -> Result<Self> {
        if config_file.exists() {
            Self::load_existing(config_file)
        } else {
            info!("no config at {}, using defaults", config_file.display());
            Ok(Self::default())
        }
    }

    /// Loads `config.json` from the project config directory, or defaults when absent.
    pub fn load() -> Result<Self> {
        let config_file = project_config_dir()?.join(CONFIG_FILE_NAME);
        Self::load_from(&config_file)
    }

    pub(crate) fn save_to(&self, config_file: &Path) -> Result<()> {
        let config_string =
            serde_json::to_string_pretty(self).context("Unable to serialize configuration data")?;

        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create {}", parent.display()))?;
        }

        let mut fd = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(config_file)
            .with_context(|| format!("Unable to write {}", config_file.display()))?;

        fd.write_all(config_string.as_bytes()).with_context(|| {
            format!("Failed to write configuration to {}", config_file.display())
        })?;

        Ok(())
    }

    /// Writes the configuration to the project config directory.
    pub fn save(&self) -> Result<()> {
        let config_file = project_config_dir()?.join(CONFIG_FILE_NAME);
        self.save_to(&config_file)?;
        info!("configuration saved to {}", config_file.display());
        Ok(())
    }
}

pub(crate) fn render_configuration(config: &Config) -> String {
    let display = ConfigDisplay::from(config);
    let mut table = Table::new([display]);
    table
        .with(Rotate::Left)
        .with(Style::modern())
        .with(Margin::new(4, 0, 0, 0));
    table.to_string()
}

////////////////////////////////////////////////////////////////////////////////
// PUBLIC
////////////////////////////////////////////////////////////////////////////////

/// Prints `config` as it is in effect, command line overrides included.
pub fn show_configuration(config: &Config) -> Result<()> {
    println!("{PROJECT_NAME} {PROJECT_VERSION}");
    println!("{}", render_configuration(config));

    Ok(())
}

/// Writes `config` to disk, so it can be edited by hand.
pub fn init_configuration(config: &Config) -> Result<()> {
    config.save()?;
    println!("{}", render_configuration(config));
    Ok(())
}
