//! Project context resolution for lsedit.
//!
//! The project root is where settings live and what an "open file" request
//! falls back to when it carries no path. It comes from `--project` or the
//! current working directory. Relative file paths are taken from the working
//! directory, which need not be the project root.

use crate::error::{LsEditError, Result};
use crate::launch::CommandResolver;
use std::env;
use std::path::{Path, PathBuf};

/// Directory holding lsedit state, relative to the project root.
pub const SETTINGS_DIR: &str = ".lsedit";

/// Settings file name within [`SETTINGS_DIR`].
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Resolved paths for a project. All paths are absolute.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path to the project root.
    pub project_root: PathBuf,

    /// Absolute path to the settings directory (`{project_root}/.lsedit/`).
    pub settings_dir: PathBuf,

    /// Directory relative file paths are resolved against.
    pub working_dir: PathBuf,
}

impl ProjectContext {
    /// Resolve the context from an explicit project directory, or the current
    /// working directory when none is given.
    ///
    /// A relative `project` is taken relative to the current directory.
    pub fn resolve(project: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            LsEditError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        let ctx = match project {
            Some(dir) if dir.is_absolute() => Self::resolve_from(dir)?,
            Some(dir) => Self::resolve_from(cwd.join(dir))?,
            None => Self::resolve_from(&cwd)?,
        };
        Ok(ctx.with_working_dir(cwd))
    }

    /// Resolve the context rooted at `root`.
    ///
    /// The directory must exist. The working directory starts out as the
    /// project root; see [`ProjectContext::with_working_dir`].
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(LsEditError::UserError(format!(
                "project directory '{}' does not exist or is not a directory",
                root.display()
            )));
        }

        let project_root = root.canonicalize().map_err(|e| {
            LsEditError::UserError(format!(
                "failed to resolve project directory '{}': {}",
                root.display(),
                e
            ))
        })?;
        let project_root = strip_verbatim_prefix(project_root);
        let settings_dir = project_root.join(SETTINGS_DIR);

        Ok(Self {
            working_dir: project_root.clone(),
            project_root,
            settings_dir,
        })
    }

    /// Replace the directory relative file paths are resolved against.
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self
    }

    /// Path to the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.settings_dir.join(SETTINGS_FILE)
    }

    /// Resolver for this project's root and working directory.
    pub fn command_resolver(&self) -> CommandResolver {
        CommandResolver::new(self.project_root.clone(), self.working_dir.clone())
    }
}

/// `canonicalize` on Windows yields `\\?\C:\...`, which many editors reject.
#[cfg(windows)]
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    match path.to_str().and_then(|s| s.strip_prefix(r"\\?\")) {
        Some(stripped) if !stripped.starts_with("UNC") => PathBuf::from(stripped),
        _ => path,
    }
}

#[cfg(not(windows))]
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    path
}
