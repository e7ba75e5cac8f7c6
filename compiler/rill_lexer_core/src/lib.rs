//! Character-source layer for the Rill lexer.
//!
//! This crate is standalone: it knows nothing about Rill's token set.
//! It provides [`SourceBuffer`], an owned buffered source, and [`Cursor`],
//! a `Copy` character cursor with bounded lookahead shared by every
//! sub-scanner in `rill_lexer`.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
