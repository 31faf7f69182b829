//! Implementation of the `lsedit config` commands.

use crate::cli::SetTemplateArgs;
use crate::context::ProjectContext;
use crate::error::{LsEditError, Result};
use crate::launch::{PLACEHOLDERS, tokenize};
use crate::settings::Settings;

/// Execute the `lsedit config show` command.
pub fn cmd_config_show(ctx: &ProjectContext) -> Result<()> {
    let settings = Settings::load(ctx.settings_path())?;
    print!("{}", render_settings(ctx, &settings));
    Ok(())
}

/// Execute the `lsedit config set-template` command.
///
/// The template is checked for at least one token before it is stored, so
/// a typo cannot silently replace a working template with nothing.
pub fn cmd_config_set_template(ctx: &ProjectContext, args: SetTemplateArgs) -> Result<()> {
    if tokenize(&args.template).is_empty() {
        return Err(LsEditError::UserError(format!(
            "template '{}' contains no command.\n\
             Fix: provide an executable, e.g. 'code \"{{file}}\" -g {{line}}:{{col}}'.",
            args.template
        )));
    }

    let path = ctx.settings_path();
    let mut settings = Settings::load(&path)?;
    settings.set_command_template(&args.template, &path)?;

    println!("Command template set to: {}", settings.command_template());
    Ok(())
}

/// Execute the `lsedit config reset` command.
pub fn cmd_config_reset(ctx: &ProjectContext) -> Result<()> {
    let path = ctx.settings_path();
    let mut settings = Settings::load(&path)?;
    settings.reset(&path)?;

    println!("Command template reset to: {}", settings.command_template());
    Ok(())
}

fn render_settings(ctx: &ProjectContext, settings: &Settings) -> String {
    let source = if settings.is_default_template() {
        " (default)"
    } else {
        ""
    };

    format!(
        "Command template: {}{}\nSettings file:    {}\nPlaceholders:     {}\n",
        settings.command_template(),
        source,
        ctx.settings_path().display(),
        PLACEHOLDERS.join(" ")
    )
}
