//! Settings loading, saving and accessors.

use super::model::{DEFAULT_COMMAND_TEMPLATE, Settings, default_command_template};
use crate::error::{LsEditError, Result};
use crate::fs::atomic_write_file;
use std::path::Path;

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            LsEditError::ConfigError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| LsEditError::ConfigError(format!("failed to parse settings YAML: {}", e)))
    }

    /// Serialize settings to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            LsEditError::ConfigError(format!("failed to serialize settings to YAML: {}", e))
        })
    }

    /// Atomically write settings to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        atomic_write_file(path, &self.to_yaml()?)?;
        tracing::info!("saved settings to {}", path.display());
        Ok(())
    }

    /// Effective command template.
    ///
    /// Falls back to [`DEFAULT_COMMAND_TEMPLATE`] when the stored value is
    /// empty or whitespace-only.
    pub fn command_template(&self) -> &str {
        if self.command_template.trim().is_empty() {
            DEFAULT_COMMAND_TEMPLATE
        } else {
            &self.command_template
        }
    }

    /// Whether the effective template is the built-in default.
    pub fn is_default_template(&self) -> bool {
        self.command_template() == DEFAULT_COMMAND_TEMPLATE
    }

    /// Set the command template and persist immediately.
    pub fn set_command_template<P: AsRef<Path>>(&mut self, template: &str, path: P) -> Result<()> {
        self.command_template = template.to_string();
        self.save(path)
    }

    /// Restore the default command template and persist immediately.
    pub fn reset<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.command_template = default_command_template();
        self.save(path)
    }
}
