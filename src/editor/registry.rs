//! Registry of editor integrations.

use super::{EditorInstallation, ExternalCodeEditor};

/// Editors known to the host, in registration order.
#[derive(Default)]
pub struct EditorRegistry {
    editors: Vec<Box<dyn ExternalCodeEditor>>,
}

impl EditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an editor. Called once per editor by the entry point.
    pub fn register(&mut self, editor: Box<dyn ExternalCodeEditor>) {
        self.editors.push(editor);
    }

    /// Installations across every registered editor.
    pub fn installations(&self) -> Vec<EditorInstallation> {
        self.editors
            .iter()
            .flat_map(|editor| editor.installations())
            .collect()
    }

    /// First registered editor that owns `editor_path`.
    pub fn editor_for_path(&self, editor_path: &str) -> Option<&dyn ExternalCodeEditor> {
        self.editors
            .iter()
            .find(|editor| editor.try_get_installation_for_path(editor_path).is_some())
            .map(|editor| editor.as_ref())
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}
