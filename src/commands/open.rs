//! Implementation of the `lsedit open` and `lsedit resolve` commands.

use crate::cli::{LocationArgs, OpenArgs, ResolveArgs};
use crate::context::ProjectContext;
use crate::editor::ScriptEditor;
use crate::error::{LsEditError, Result};
use crate::launch::ResolvedCommand;

/// Execute the `lsedit open` command.
///
/// Resolves the template for the requested location and starts the editor.
/// With `--dry-run`, prints the command instead.
pub fn cmd_open(ctx: &ProjectContext, args: OpenArgs) -> Result<()> {
    let editor = ScriptEditor::new(ctx.clone());

    if args.dry_run {
        let cmd = resolve_location(&editor, &args.location)?;
        println!("{}", format_command(&cmd));
        return Ok(());
    }

    let location = &args.location;
    editor.open(
        location.template.as_deref(),
        location.path.as_deref().unwrap_or_default(),
        location.line,
        location.column,
    )?;
    Ok(())
}

/// Execute the `lsedit resolve` command.
pub fn cmd_resolve(ctx: &ProjectContext, args: ResolveArgs) -> Result<()> {
    let editor = ScriptEditor::new(ctx.clone());
    let cmd = resolve_location(&editor, &args.location)?;
    println!("{}", render_resolved(&cmd, args.json)?);
    Ok(())
}

fn resolve_location(editor: &ScriptEditor, location: &LocationArgs) -> Result<ResolvedCommand> {
    editor.resolve(
        location.template.as_deref(),
        location.path.as_deref().unwrap_or_default(),
        location.line,
        location.column,
    )
}

/// Render a resolved command as text or JSON.
fn render_resolved(cmd: &ResolvedCommand, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(cmd).map_err(|e| {
            LsEditError::UserError(format!("failed to serialize resolved command: {}", e))
        })
    } else {
        Ok(format_command(cmd))
    }
}

/// Quote a resolved command for display so it can be pasted into a shell.
fn format_command(cmd: &ResolvedCommand) -> String {
    shell_words::join(std::iter::once(&cmd.executable).chain(&cmd.arguments))
}
