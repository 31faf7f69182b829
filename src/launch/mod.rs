//! Editor command resolution and launch.
//!
//! This module turns a command template into a running editor process:
//!
//! - **Tokenizer**: Quote-aware splitting of the template into tokens
//! - **Placeholder**: `{file}` / `{line}` / `{col}` substitution per token
//! - **Resolver**: Defaults, tokenization and substitution into a `ResolvedCommand`
//! - **Launcher**: Detached process creation without a shell
//!
//! # Template Syntax
//!
//! ```text
//! code "{file}" -g {line}:{col}
//! ```
//!
//! Quote a token with `"` or `'` to keep spaces inside it.

mod launcher;
mod placeholder;
mod resolver;
mod tokenizer;

pub use launcher::{LaunchError, Launched, launch};
pub use placeholder::{
    COLUMN_PLACEHOLDER, FILE_PLACEHOLDER, LINE_PLACEHOLDER, PLACEHOLDERS, SubstitutionContext,
    resolve_placeholders,
};
pub use resolver::{CommandResolver, ResolveError, ResolvedCommand};
pub use tokenizer::tokenize;
