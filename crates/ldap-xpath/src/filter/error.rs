//! Error type for LDAP filter parsing.

use thiserror::Error;

use super::lexer::{Token, TokenKind};

/// A specialized Result type for filter parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error produced when LDAP filter text fails to parse.
///
/// Every failure carries the position of the offending token and the
/// complete filter text, so callers can point at the problem without
/// re-reading the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    /// What went wrong, phrased as an unmet expectation.
    pub message: String,
    /// 1-based line of the offending token.
    pub line: u32,
    /// 1-based column of the offending token.
    pub column: u32,
    /// Literal text of the offending token; empty at end of input.
    pub token_text: String,
    /// The complete filter text being parsed.
    pub filter_text: String,
}

impl ParseError {
    /// Creates an error positioned at `token`, with the message used
    /// verbatim.
    pub(crate) fn at_token(message: impl Into<String>, token: &Token, source: &str) -> Self {
        Self {
            message: message.into(),
            line: token.line,
            column: token.column,
            token_text: token.value.clone(),
            filter_text: source.to_string(),
        }
    }

    /// Creates an error positioned at `token`, naming what was found
    /// there instead of the expectation.
    pub(crate) fn unexpected(expected: impl Into<String>, token: &Token, source: &str) -> Self {
        let found = if token.kind == TokenKind::End {
            "end of input".to_string()
        } else {
            format!("'{}'", token.value)
        };
        Self::at_token(format!("{}, found {found}", expected.into()), token, source)
    }

    /// Creates an error about the input as a whole, positioned at its
    /// start.
    pub(crate) fn invalid_input(message: impl Into<String>, source: &str) -> Self {
        Self {
            message: message.into(),
            line: 1,
            column: 1,
            token_text: String::new(),
            filter_text: source.to_string(),
        }
    }

    /// Renders a caret diagnostic pointing at the offending position.
    ///
    /// The output is the error message followed by the offending source
    /// line and a `^` marker under the reported column. Tabs before the
    /// column are echoed into the padding so the marker stays aligned.
    pub fn annotate(&self) -> String {
        let mut annotated = self.to_string();
        if let Some(line) = self.filter_text.lines().nth(self.line as usize - 1) {
            let padding: String = line
                .chars()
                .take(self.column as usize - 1)
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect();
            annotated.push('\n');
            annotated.push_str(line);
            annotated.push('\n');
            annotated.push_str(&padding);
            annotated.push('^');
        }
        annotated
    }
}
