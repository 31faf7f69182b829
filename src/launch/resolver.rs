//! Command template resolution.
//!
//! Turns a template plus an "open file at location" request into a
//! [`ResolvedCommand`]: tokenize, apply defaults, substitute placeholders
//! per token. Nothing here touches the filesystem or spawns anything.

use super::placeholder::{SubstitutionContext, resolve_placeholders};
use super::tokenizer::tokenize;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Reasons a template cannot be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Template is empty or whitespace-only.
    #[error("command template is empty")]
    EmptyTemplate,

    /// Tokenizing the template produced nothing.
    #[error("command template did not produce a command")]
    NoTokensProduced,

    /// The first token substituted to an empty executable.
    #[error("command template did not produce an executable")]
    EmptyExecutable,
}

/// An executable plus its argument vector, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCommand {
    /// Program to run.
    pub executable: String,
    /// Arguments, already split and substituted.
    pub arguments: Vec<String>,
}

/// Resolves templates against a project root and a base directory.
///
/// The project root stands in for the file path when the request has none.
/// Relative paths are joined onto `base_dir`, normally the working directory
/// of the invoking process.
#[derive(Debug, Clone)]
pub struct CommandResolver {
    project_root: PathBuf,
    base_dir: PathBuf,
}

impl CommandResolver {
    pub fn new(project_root: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            base_dir: base_dir.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve `template` for opening `raw_path` at `raw_line`:`raw_column`.
    ///
    /// Non-positive line and column become 1. An empty path becomes the
    /// project root; a relative path is taken from the base directory.
    ///
    /// Tokens after the first that substitute to the empty string are
    /// dropped rather than passed as empty arguments.
    pub fn resolve(
        &self,
        template: &str,
        raw_path: &str,
        raw_line: i64,
        raw_column: i64,
    ) -> Result<ResolvedCommand, ResolveError> {
        if template.trim().is_empty() {
            return Err(ResolveError::EmptyTemplate);
        }

        let ctx = SubstitutionContext {
            path: self.absolute_path(raw_path),
            line: default_position(raw_line),
            column: default_position(raw_column),
        };

        let tokens = tokenize(template);
        let (first, rest) = tokens
            .split_first()
            .ok_or(ResolveError::NoTokensProduced)?;

        let executable = resolve_placeholders(first, &ctx);
        if executable.trim().is_empty() {
            return Err(ResolveError::EmptyExecutable);
        }

        let arguments = rest
            .iter()
            .map(|token| resolve_placeholders(token, &ctx))
            .filter(|arg| !arg.is_empty())
            .collect();

        Ok(ResolvedCommand {
            executable,
            arguments,
        })
    }

    fn absolute_path(&self, raw_path: &str) -> String {
        if raw_path.is_empty() {
            return self.project_root.to_string_lossy().into_owned();
        }

        let path = Path::new(raw_path);
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        };

        normalize_lexically(&joined).to_string_lossy().into_owned()
    }
}

/// Line/column defaulting: anything below 1 becomes 1.
fn default_position(raw: i64) -> u32 {
    if raw > 0 {
        u32::try_from(raw).unwrap_or(u32::MAX)
    } else {
        1
    }
}

/// Remove `.` and fold `..` without consulting the filesystem.
///
/// `..` never climbs above the root or a path prefix.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
