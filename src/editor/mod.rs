//! External code editor integration.
//!
//! A host that opens source files at a location talks to editors through
//! [`ExternalCodeEditor`]. Editors are added to an [`EditorRegistry`] by an
//! explicit [`EditorRegistry::register`] call from the entry point; nothing
//! registers itself implicitly.
//!
//! [`ScriptEditor`] is the implementation backed by the persisted command
//! template.

mod registry;
mod script_editor;

pub use registry::EditorRegistry;
pub use script_editor::{EDITOR_NAME, EDITOR_PATH, ScriptEditor};

/// An installed editor as presented to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInstallation {
    /// Display name.
    pub name: String,
    /// Identifier the host stores to remember the selection.
    pub path: String,
}

/// Contract between a host and an editor integration.
pub trait ExternalCodeEditor {
    /// Installations this integration provides.
    fn installations(&self) -> Vec<EditorInstallation>;

    /// The installation matching `editor_path`, if this integration owns it.
    fn try_get_installation_for_path(&self, editor_path: &str) -> Option<EditorInstallation>;

    /// Open `path` at `line`:`column`.
    ///
    /// Failures are logged and reported as `false`; this never panics.
    fn open_project(&self, path: &str, line: i64, column: i64) -> bool;
}
