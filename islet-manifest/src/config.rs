//! `islet.toml` project configuration.

use std::{
    io,
    path::{Path, PathBuf},
};

use islet_core::{MIN_RUNTIME_VERSION, Version};
use serde::Deserialize;

use crate::{Error, Result};

/// Name of the optional configuration file at the project root.
pub const CONFIG_FILENAME: &str = "islet.toml";

/// Parsed `islet.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub runtime: RuntimeConfig,
    pub formatter: FormatterConfig,
    pub dev: DevConfig,
    pub build: BuildConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Runtime executable, resolved on `PATH`.
    pub executable: String,
    /// Oldest accepted runtime version.
    pub min_version: Version,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            executable: "deno".to_string(),
            min_version: MIN_RUNTIME_VERSION,
        }
    }
}

/// Formatter reading source on stdin and writing the canonical form to stdout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub command: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            command: vec!["deno".into(), "fmt".into(), "-".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevConfig {
    /// Module that starts the server, relative to the project root.
    pub entrypoint: String,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            entrypoint: "main.ts".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build command, the registry path is appended as last argument.
    pub command: Vec<String>,
    /// Output directory for built assets.
    pub out_dir: String,
    /// Browser targets handed to the bundler.
    pub target: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: vec!["deno".into(), "run".into(), "-A".into(), "build.ts".into()],
            out_dir: "_islet".to_string(),
            target: vec!["chrome99".into(), "firefox99".into(), "safari15".into()],
        }
    }
}

/// An `islet.toml` file with its raw content, or the defaults when absent.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    content: Option<String>,
    config: Config,
}

impl ConfigFile {
    /// Load `islet.toml` from `project_root`, falling back to defaults if missing.
    pub fn open(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILENAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self {
                    path,
                    content: None,
                    config: Config::default(),
                });
            }
            Err(e) => return Err(Error::io(&path, e)),
        };

        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content: Some(content),
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the configuration came from a file on disk.
    pub fn exists(&self) -> bool {
        self.content.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Config {
    /// Parse and validate configuration text.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::config(e, content, filename))?;

        if config.formatter.command.is_empty() {
            return Err(Error::invalid_config(
                "[formatter] command must not be empty",
                content,
                filename,
            ));
        }
        if config.build.command.is_empty() {
            return Err(Error::invalid_config(
                "[build] command must not be empty",
                content,
                filename,
            ));
        }
        if config.dev.entrypoint.trim().is_empty() {
            return Err(Error::invalid_config(
                "[dev] entrypoint must not be empty",
                content,
                filename,
            ));
        }

        Ok(config)
    }
}
