// error.rs - Error type for building matchers.
//
// Searching never fails: a line that does not match is `None`. Errors only
// come from turning user input (mode names, prepared patterns, limits) into
// a `Matcher`.

use std::fmt;

pub const LINEMATCH_ERR_UNKNOWN_MODE: i32 = -1;
pub const LINEMATCH_ERR_UNFOLDED_PATTERN: i32 = -2;
pub const LINEMATCH_ERR_INVALID_ARGUMENT: i32 = -3;

/// Error type for matcher construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The match mode name is not one of `fuzzy`, `exact`, `prefix`,
    /// `suffix` or `equal`.
    UnknownMode(String),
    /// A pattern marked case-insensitive contains a rune that is not folded.
    UnfoldedPattern { index: usize, ch: char },
    /// Invalid argument passed to a builder method.
    InvalidArgument(&'static str),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::UnknownMode(name) => write!(f, "unknown match mode: {:?}", name),
            MatchError::UnfoldedPattern { index, ch } => write!(
                f,
                "case-insensitive pattern has unfolded rune {:?} at index {}",
                ch, index
            ),
            MatchError::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
        }
    }
}

impl std::error::Error for MatchError {}

impl MatchError {
    /// Stable numeric code for the error kind.
    pub fn code(&self) -> i32 {
        match self {
            MatchError::UnknownMode(_) => LINEMATCH_ERR_UNKNOWN_MODE,
            MatchError::UnfoldedPattern { .. } => LINEMATCH_ERR_UNFOLDED_PATTERN,
            MatchError::InvalidArgument(_) => LINEMATCH_ERR_INVALID_ARGUMENT,
        }
    }
}
