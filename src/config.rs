// src/config.rs
// Configuration system for hakiki

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::reporter::{ConsoleReporter, LogReporter, PanicReporter, Reporter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReporterKind {
    Panic,
    Log,
    Console,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_reporter")]
    pub reporter: ReporterKind,

    #[serde(default = "default_color")]
    pub color: ColorChoice,

    #[serde(default = "default_timestamps")]
    pub timestamps: bool,

    #[serde(default = "default_body_preview")]
    pub body_preview: usize,
}

fn default_reporter() -> ReporterKind {
    ReporterKind::Panic
}
fn default_color() -> ColorChoice {
    ColorChoice::Auto
}
fn default_timestamps() -> bool {
    true
}
pub(crate) fn default_body_preview() -> usize {
    256
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reporter: default_reporter(),
            color: default_color(),
            timestamps: default_timestamps(),
            body_preview: default_body_preview(),
        }
    }
}

impl Config {
    pub fn build_reporter(&self) -> Rc<dyn Reporter> {
        match self.reporter {
            ReporterKind::Panic => Rc::new(PanicReporter),
            ReporterKind::Log => Rc::new(LogReporter),
            ReporterKind::Console => Rc::new(
                ConsoleReporter::new()
                    .with_timestamps(self.timestamps)
                    .with_color(self.color),
            ),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    FileNotFound(String),
    ParseError(String),
    ValidationError(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Configuration file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse configuration: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation failed: {}", msg)
            }
            ConfigError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

const CONFIG_FILES: [&str; 2] = ["hakiki.json", ".hakiki.json"];

pub struct ConfigLoader {
    search_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(search_dir: PathBuf) -> Self {
        Self { search_dir }
    }

    /// Loads the first configuration file found, or the defaults when there
    /// is none. A custom path must exist.
    pub fn load_configuration(
        &self,
        custom_config_path: Option<&str>,
    ) -> Result<Config, ConfigError> {
        let candidates: Vec<PathBuf> = match custom_config_path {
            Some(custom_path) => {
                let path = Path::new(custom_path);
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    self.search_dir.join(path)
                };
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(
                        path.to_string_lossy().to_string(),
                    ));
                }
                vec![path]
            }
            None => CONFIG_FILES
                .iter()
                .map(|name| self.search_dir.join(name))
                .collect(),
        };

        let mut config = Config::default();

        for config_path in candidates {
            if !config_path.exists() {
                continue;
            }

            let contents = fs::read_to_string(&config_path)?;
            log::info!("Loading configuration from: {}", config_path.display());

            config = serde_json::from_str(&contents).map_err(|e| {
                ConfigError::ParseError(format!("{}: {}", config_path.display(), e))
            })?;
            break;
        }

        self.validate_config(&config)?;

        Ok(config)
    }

    fn validate_config(&self, config: &Config) -> Result<(), ConfigError> {
        if config.body_preview == 0 {
            return Err(ConfigError::ValidationError(
                "bodyPreview must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
