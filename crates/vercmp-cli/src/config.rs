use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use vercmp_semver::VersionParser;

/// File name searched for when no explicit config path is given
pub const CONFIG_FILE_NAME: &str = "vercmp.toml";

/// The main vercmp configuration file structure (vercmp.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VercmpConfig {
    /// Update check configuration
    pub update: UpdateConfig,

    /// Minimum version requirement
    pub require: RequireConfig,
}

/// Update check configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Version of the running build, used when --current is not given
    pub current: Option<String>,
}

/// Minimum version requirement configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RequireConfig {
    /// Lowest acceptable version, used when --minimum is not given
    pub minimum: Option<String>,
}

impl VercmpConfig {
    /// Parse configuration from TOML text and validate the versions it declares
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: VercmpConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file path
    pub fn load_file(path: &Path) -> Result<Self> {
        log::debug!("Reading config {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load configuration from vercmp.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                return Self::load_file(&config_path).map(Some);
            }

            if !current.pop() {
                log::debug!("No {} found above {}", CONFIG_FILE_NAME, start_dir.display());
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    fn validate(&self) -> Result<()> {
        if let Some(current) = &self.update.current {
            VersionParser::parse(current).context("update.current is not a valid version")?;
        }
        if let Some(minimum) = &self.require.minimum {
            VersionParser::parse(minimum).context("require.minimum is not a valid version")?;
        }
        Ok(())
    }
}
