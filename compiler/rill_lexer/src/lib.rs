//! Lexer for the Rill language.
//!
//! Pull-based: construct a [`Lexer`] over a [`SourceBuffer`] and call
//! [`Lexer::next_token`] until it yields a [`TokenKind::EndOfInput`] token.
//! All lexical errors are fatal — there is no error-token kind and no
//! resynchronization; the first [`LexError`] aborts the scan.
//!
//! ```
//! use rill_lexer::TokenKind;
//!
//! let tokens = rill_lexer::tokenize("INT x = 42;")?;
//! assert_eq!(tokens[0].kind, TokenKind::Type);
//! assert_eq!(tokens[3].text, "42");
//! # Ok::<(), rill_lexer::LexError>(())
//! ```

use std::io;

mod keywords;
mod lex_error;
mod lexer;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use rill_lexer_core::SourceBuffer;
pub use token::{Token, TokenKind};

/// Lex an entire source string into a token vector.
///
/// The END_OF_INPUT token is included as the final element. Fails on the
/// first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::new(source);
    drain(&buffer)
}

/// Lex an entire source from a reader, buffering it first.
///
/// Read failures (invalid UTF-8 included) surface as
/// [`LexErrorKind::Io`] rather than being swallowed.
pub fn tokenize_reader(reader: impl io::Read) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::from_reader(reader).map_err(|err| LexError::io(&err))?;
    drain(&buffer)
}

#[tracing::instrument(level = "debug", skip(buffer), fields(source_len = buffer.len()))]
fn drain(buffer: &SourceBuffer) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(buffer);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(token) => {
                let done = token.kind == TokenKind::EndOfInput;
                tokens.push(token);
                if done {
                    return Ok(tokens);
                }
            }
            Err(err) => {
                tracing::error!(%err, "aborting tokenization");
                return Err(err);
            }
        }
    }
}
