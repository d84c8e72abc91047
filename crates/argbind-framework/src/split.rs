//! Shell-like splitting of a single command line into tokens.

use thiserror::Error;

/// A command line that cannot be split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// A quote was opened and never closed.
    #[error("unterminated {quote} quote")]
    UnterminatedQuote {
        /// `single` or `double`.
        quote: &'static str,
    },

    /// The line ends with a lone backslash.
    #[error("trailing escape character")]
    TrailingEscape,
}

/// Simple shell-like argument splitting.
///
/// Handles:
/// - Space-separated arguments
/// - Quoted strings (single and double quotes), including empty ones
/// - Backslash escapes outside quotes and inside double quotes
pub fn shell_split(input: &str) -> Result<Vec<String>, SplitError> {
    let mut args = Vec::new();
    let mut current = String::new();
    // An empty quoted string still produces a token.
    let mut has_token = false;
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut escape_next = false;

    for ch in input.chars() {
        if escape_next {
            current.push(ch);
            has_token = true;
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if !in_single_quote => {
                escape_next = true;
            }
            '\'' if !in_double_quote => {
                in_single_quote = !in_single_quote;
                has_token = true;
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
                has_token = true;
            }
            ' ' | '\t' | '\n' | '\r' if !in_single_quote && !in_double_quote => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            _ => {
                current.push(ch);
                has_token = true;
            }
        }
    }

    if escape_next {
        return Err(SplitError::TrailingEscape);
    }
    if in_single_quote {
        return Err(SplitError::UnterminatedQuote { quote: "single" });
    }
    if in_double_quote {
        return Err(SplitError::UnterminatedQuote { quote: "double" });
    }

    if has_token {
        args.push(current);
    }

    Ok(args)
}
