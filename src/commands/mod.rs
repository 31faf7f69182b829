//! Command implementations for lsedit.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and builds the editor registry the commands share.

mod config;
mod editors;
mod open;

use crate::cli::{Command, ConfigAction};
use crate::context::ProjectContext;
use crate::editor::{EditorRegistry, ScriptEditor};
use crate::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, project: Option<&Path>) -> Result<()> {
    let ctx = ProjectContext::resolve(project)?;

    match command {
        Command::Open(args) => open::cmd_open(&ctx, args),
        Command::Resolve(args) => open::cmd_resolve(&ctx, args),
        Command::Config(config_cmd) => match config_cmd.action {
            ConfigAction::Show => config::cmd_config_show(&ctx),
            ConfigAction::SetTemplate(args) => config::cmd_config_set_template(&ctx, args),
            ConfigAction::Reset => config::cmd_config_reset(&ctx),
        },
        Command::Editors => editors::cmd_editors(&build_registry(&ctx)),
    }
}

/// Register the editors this binary provides.
pub fn build_registry(ctx: &ProjectContext) -> EditorRegistry {
    let mut registry = EditorRegistry::new();
    registry.register(Box::new(ScriptEditor::new(ctx.clone())));
    registry
}
