//! Owned, fully-buffered source text.
//!
//! The lexer is pull-based but its input is buffered eagerly: either the
//! caller already holds the source as a string, or
//! [`SourceBuffer::from_reader`] drains an [`io::Read`] up front. Once the
//! buffer exists, every cursor operation is infallible — no read during
//! scanning can fail or block.

use std::io;

use crate::Cursor;

/// Owned source text for one lexer run.
///
/// Immutable once constructed; all scanning state lives in [`Cursor`]
/// values borrowed from it.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    text: String,
}

impl SourceBuffer {
    /// Create a buffer from source text already in memory.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            text: source.into(),
        }
    }

    /// Create a buffer by draining a reader to end of input.
    ///
    /// The source must be valid UTF-8; invalid bytes surface as an
    /// [`io::ErrorKind::InvalidData`] error, like any other read failure.
    pub fn from_reader(mut reader: impl io::Read) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self { text })
    }

    /// The buffered source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte length of the source.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// `true` when the source is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// A cursor positioned at the start of the source.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text)
    }
}
