//! Persisted editor settings for lsedit.
//!
//! This module defines the Settings struct that represents `.lsedit/settings.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are kept and
//! written back), a default command template, and atomic saves.

mod model;
mod operations;


pub use model::{DEFAULT_COMMAND_TEMPLATE, Settings};
