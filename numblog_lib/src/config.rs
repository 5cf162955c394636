use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;
use crate::highlight::DEFAULT_THEME;

pub const DEFAULT_CONFIG_FILE: &str = "Numblog.toml";
pub const DEFAULT_STYLESHEET: &str = "classic.css";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Html,
}

impl Format {
    pub fn parse(s: &str) -> Option<Format> {
        match s {
            "text" => Some(Format::Text),
            "html" => Some(Format::Html),
            _ => None,
        }
    }
}

/// This will hold our final configuration (after merging clap data and the
/// conf file).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: Format,
    /// `None` means stdout.
    pub output: Option<PathBuf>,
    pub theme: String,
    pub color: bool,
    /// Stylesheet href written into html pages.
    pub stylesheet: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            format: Format::Text,
            output: None,
            theme: DEFAULT_THEME.to_owned(),
            color: true,
            stylesheet: DEFAULT_STYLESHEET.to_owned(),
        }
    }
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Config, Error> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Config, Error> {
        let source =
            fs::read_to_string(path).map_err(|e| Error::ConfigFile(path.to_owned(), e))?;
        debug!("loaded conf file {}", path.display());
        Config::from_toml(&source)
    }

    /// Loads `path` when it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Config, Error> {
        if path.exists() {
            Config::load(path)
        } else {
            debug!("no conf file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}
