//! Quote-aware tokenizer for command templates.
//!
//! Splits a template such as `code "{file}" -g {line}:{col}` into its
//! whitespace-separated tokens. Single- or double-quoted spans suppress
//! splitting, which is what keeps paths with spaces in one argument.
//!
//! # Rules
//!
//! - A quote opens a span only when no span is open; the quote itself is dropped.
//! - Only the quote that opened a span closes it. The other quote kind is literal inside.
//! - Whitespace outside a span ends the current token; runs of whitespace never
//!   produce empty tokens.
//! - An unterminated span runs to the end of input and is still emitted.
//!
//! There are no escapes, no variable expansion, and no nesting.

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InQuote(char),
}

/// Split a command template into tokens.
///
/// Never fails: an empty or whitespace-only template yields an empty vector.
///
/// ```
/// use lsedit::launch::tokenize;
///
/// let tokens = tokenize(r#"code "my file.cs" -g 1:1"#);
/// assert_eq!(tokens, vec!["code", "my file.cs", "-g", "1:1"]);
/// ```
pub fn tokenize(template: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::Normal;

    for ch in template.chars() {
        match state {
            ScanState::InQuote(quote) if ch == quote => {
                state = ScanState::Normal;
            }
            ScanState::InQuote(_) => current.push(ch),
            ScanState::Normal if is_quote(ch) => {
                state = ScanState::InQuote(ch);
            }
            ScanState::Normal if ch.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            ScanState::Normal => current.push(ch),
        }
    }

    // An open span at end of input is tolerated.
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}
