//! Settings struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Template used when none is stored, or the stored one is blank.
pub const DEFAULT_COMMAND_TEMPLATE: &str = "code \"{file}\" -g {line}:{col}";

/// Editor settings for a project.
///
/// This struct represents the contents of `.lsedit/settings.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Command template used to open a file at a location.
    ///
    /// Placeholders `{file}`, `{line}` and `{col}` are substituted per token.
    /// Read it through [`Settings::command_template`], which applies the
    /// default when this is blank.
    #[serde(default = "default_command_template")]
    pub command_template: String,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command_template: default_command_template(),
            extra: BTreeMap::new(),
        }
    }
}

pub(crate) fn default_command_template() -> String {
    DEFAULT_COMMAND_TEMPLATE.to_string()
}
