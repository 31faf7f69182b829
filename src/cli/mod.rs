//! CLI argument parsing for lsedit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// lsedit: open source files at a line and column in an external editor.
///
/// The editor is described by a command template such as
/// `code "{file}" -g {line}:{col}`, stored per project in `.lsedit/settings.yaml`.
#[derive(Parser, Debug)]
#[command(name = "lsedit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root (default: current directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Log resolution details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for lsedit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a file at a location in the configured editor.
    ///
    /// The editor is started in the background; lsedit does not wait for it.
    Open(OpenArgs),

    /// Print the command `open` would run, without running it.
    Resolve(ResolveArgs),

    /// Show or change the stored command template.
    Config(ConfigCommand),

    /// List registered editor installations.
    Editors,
}

/// Location to open, shared by `open` and `resolve`.
#[derive(Args, Debug)]
pub struct LocationArgs {
    /// File to open. Relative paths are taken from the current directory.
    /// Without a path the project root itself is opened.
    pub path: Option<String>,

    /// 1-based line number (values below 1 become 1).
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub line: i64,

    /// 1-based column number (values below 1 become 1).
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub column: i64,

    /// Use this template instead of the stored one.
    #[arg(short, long)]
    pub template: Option<String>,
}

/// Arguments for the `open` command.
#[derive(Args, Debug)]
pub struct OpenArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Print the command instead of starting it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Print the resolved command as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Config subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Available config actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective command template and where it is stored.
    Show,

    /// Store a new command template.
    ///
    /// Placeholders: {file} {line} {col}
    SetTemplate(SetTemplateArgs),

    /// Restore the default command template.
    Reset,
}

/// Arguments for the `config set-template` command.
#[derive(Args, Debug)]
pub struct SetTemplateArgs {
    /// The new template, e.g. 'nvim +{line} "{file}"'.
    pub template: String,
}
