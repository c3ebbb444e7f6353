//! Error types returned by the translation pipeline.

use std::fmt;

/// A failure while tokenizing or parsing a formula string.
///
/// `offset` is the byte offset into the input at which the problem was detected, so
/// callers can point a user at the exact spot in the source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(offset: usize, message: impl Into<String>) -> ParseError {
        ParseError {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "parse error at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Everything that can go wrong between receiving formula text and producing an
/// [`crate::automaton::Automaton`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TranslateError {
    Parse(ParseError),
    /// Raised only when [`crate::translate::TranslateOptions::max_states`] is set and
    /// the state enumerator would exceed it.
    TooLarge { limit: usize, produced: usize },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TranslateError::Parse(e) => write!(f, "{e}"),
            TranslateError::TooLarge { limit, produced } => write!(
                f,
                "automaton exceeds the configured state limit ({produced} states, limit {limit})"
            ),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<ParseError> for TranslateError {
    fn from(e: ParseError) -> TranslateError {
        TranslateError::Parse(e)
    }
}
