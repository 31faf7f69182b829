//! lsedit: open source files at a line and column in an external editor.
//!
//! A per-project command template such as `code "{file}" -g {line}:{col}` is
//! tokenized with quote awareness, its `{file}`, `{line}` and `{col}`
//! placeholders are substituted per token, and the result is spawned
//! directly, without a shell.

pub mod cli;
pub mod commands;
pub mod context;
pub mod editor;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod launch;
pub mod logging;
pub mod settings;

#[cfg(test)]
mod test_support;
