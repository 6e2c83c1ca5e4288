//! core::tokenize
//!
//! Quote-aware splitting of a raw input line into tokens.
//!
//! # Rules
//!
//! - Whitespace separates tokens; runs of whitespace collapse
//! - A double quote toggles quote mode; whitespace inside quotes is kept
//! - Quote characters never appear in the output
//! - Empty tokens are never emitted
//! - An unterminated quote extends to the end of the line
//!
//! # Example
//!
//! ```
//! use commandant::core::tokenize::tokenize;
//!
//! assert_eq!(tokenize(r#"a "b c" d"#), vec!["a", "b c", "d"]);
//! ```

/// Split a line into tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
