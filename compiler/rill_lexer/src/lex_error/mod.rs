//! Lexical errors.
//!
//! Every lexical error is fatal: the lexer has no error-token kind and no
//! resynchronization. An error carries the byte offset where the scan
//! stopped and a kind describing what went wrong; together they are the
//! entire diagnostic surface of the crate.

use std::io;

use thiserror::Error;

/// A fatal lexical error.
///
/// After receiving one, the caller must abort tokenization; the stream
/// position is unspecified.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("lexical error at byte {pos}: {kind}")]
pub struct LexError {
    /// Byte offset in the source where the error was detected.
    pub pos: usize,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexErrorKind {
    /// The closing `"` of a string literal was never found.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Input ended immediately after a `\` inside a string literal.
    #[error("unterminated escape sequence")]
    UnterminatedEscape,
    /// A `\` introduced an escape the language does not define.
    #[error("unknown escape sequence: \\{escape}")]
    UnknownEscape { escape: char },
    /// `=/` was not completed by `=`.
    #[error("malformed operator: expected `=` to complete `=/=`")]
    IncompleteNotEqual,
    /// A single `&`; the language has no bitwise-and.
    #[error("malformed operator: lone `&` (use `&&`)")]
    LoneAmpersand,
    /// A single `|`; the language has no bitwise-or.
    #[error("malformed operator: lone `|` (use `||`)")]
    LonePipe,
    /// A character no token can start with.
    #[error("unrecognized character: {ch:?}")]
    UnrecognizedChar { ch: char },
    /// Input ended while a numeric literal scan was in progress.
    #[error("unexpected end of input in numeric literal")]
    UnexpectedEofInNumber,
    /// A failure in the underlying source, re-signaled rather than
    /// swallowed.
    #[error("I/O error reading source: {message}")]
    Io { message: String },
}

impl LexError {
    #[cold]
    pub(crate) fn unterminated_string(pos: usize) -> Self {
        Self {
            pos,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub(crate) fn unterminated_escape(pos: usize) -> Self {
        Self {
            pos,
            kind: LexErrorKind::UnterminatedEscape,
        }
    }

    #[cold]
    pub(crate) fn unknown_escape(pos: usize, escape: char) -> Self {
        Self {
            pos,
            kind: LexErrorKind::UnknownEscape { escape },
        }
    }

    #[cold]
    pub(crate) fn incomplete_not_equal(pos: usize) -> Self {
        Self {
            pos,
            kind: LexErrorKind::IncompleteNotEqual,
        }
    }

    #[cold]
    pub(crate) fn lone_ampersand(pos: usize) -> Self {
        Self {
            pos,
            kind: LexErrorKind::LoneAmpersand,
        }
    }

    #[cold]
    pub(crate) fn lone_pipe(pos: usize) -> Self {
        Self {
            pos,
            kind: LexErrorKind::LonePipe,
        }
    }

    #[cold]
    pub(crate) fn unrecognized_char(pos: usize, ch: char) -> Self {
        Self {
            pos,
            kind: LexErrorKind::UnrecognizedChar { ch },
        }
    }

    #[cold]
    pub(crate) fn unexpected_eof_in_number(pos: usize) -> Self {
        Self {
            pos,
            kind: LexErrorKind::UnexpectedEofInNumber,
        }
    }

    /// Wrap an I/O failure from the character source. Reads happen while
    /// buffering, before any token is produced, so the offset is zero.
    #[cold]
    pub(crate) fn io(err: &io::Error) -> Self {
        Self {
            pos: 0,
            kind: LexErrorKind::Io {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
