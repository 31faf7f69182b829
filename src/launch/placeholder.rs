//! Placeholder substitution for a single token.
//!
//! Recognized placeholders (case-sensitive):
//!
//! - `{file}` - Absolute path of the file to open
//! - `{line}` - 1-based line number
//! - `{col}` - 1-based column number
//!
//! Anything else that looks like a placeholder is left verbatim.
//! Substituted values are never scanned again, so a path that itself
//! contains `{line}` is copied through unchanged.

/// Placeholder for the file path.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Placeholder for the line number.
pub const LINE_PLACEHOLDER: &str = "{line}";

/// Placeholder for the column number.
pub const COLUMN_PLACEHOLDER: &str = "{col}";

/// All recognized placeholders, in match order.
pub const PLACEHOLDERS: [&str; 3] = [FILE_PLACEHOLDER, LINE_PLACEHOLDER, COLUMN_PLACEHOLDER];

/// A recognized placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    File,
    Line,
    Column,
}

impl Placeholder {
    const ALL: [Placeholder; 3] = [Placeholder::File, Placeholder::Line, Placeholder::Column];

    fn token(self) -> &'static str {
        match self {
            Placeholder::File => FILE_PLACEHOLDER,
            Placeholder::Line => LINE_PLACEHOLDER,
            Placeholder::Column => COLUMN_PLACEHOLDER,
        }
    }
}

/// Values substituted into a token.
///
/// `line` and `column` are already defaulted to at least 1 by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionContext {
    /// Absolute file path.
    pub path: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl SubstitutionContext {
    fn value_for(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::File => self.path.clone(),
            Placeholder::Line => self.line.to_string(),
            Placeholder::Column => self.column.to_string(),
        }
    }
}

/// Substitute placeholders in `token` using `ctx`.
///
/// Single left-to-right pass: at each position the first placeholder that
/// matches is replaced and the scan resumes after it in the input.
pub fn resolve_placeholders(token: &str, ctx: &SubstitutionContext) -> String {
    if !token.contains('{') {
        return token.to_string();
    }

    let mut result = String::with_capacity(token.len() + ctx.path.len());
    let mut rest = token;

    while let Some(brace) = rest.find('{') {
        result.push_str(&rest[..brace]);
        rest = &rest[brace..];

        match Placeholder::ALL
            .into_iter()
            .find(|p| rest.starts_with(p.token()))
        {
            Some(placeholder) => {
                result.push_str(&ctx.value_for(placeholder));
                rest = &rest[placeholder.token().len()..];
            }
            None => {
                result.push('{');
                rest = &rest[1..];
            }
        }
    }

    result.push_str(rest);
    result
}
