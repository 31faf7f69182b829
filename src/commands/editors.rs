//! Implementation of the `lsedit editors` command.

use crate::editor::{EditorInstallation, EditorRegistry};
use crate::error::Result;

/// Execute the `lsedit editors` command.
pub fn cmd_editors(registry: &EditorRegistry) -> Result<()> {
    print!("{}", render_installations(&registry.installations()));
    Ok(())
}

fn render_installations(installations: &[EditorInstallation]) -> String {
    if installations.is_empty() {
        return "No editors registered.\n".to_string();
    }

    installations
        .iter()
        .map(|i| format!("{}\n  {}\n", i.name, i.path))
        .collect()
}
