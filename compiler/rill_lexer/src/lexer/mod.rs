//! The tokenizer: trivia skipping, dispatch, and the sub-scanners.
//!
//! One token is produced per call. Dispatch looks at the first significant
//! character and hands off to a focused sub-scanner; every sub-scanner
//! decides with `current`/`peek` before consuming, so a character that
//! belongs to the next token is never lost.

use rill_lexer_core::{Cursor, SourceBuffer};

use crate::keywords;
use crate::lex_error::LexError;
use crate::token::{Token, TokenKind};

/// Pull-based tokenizer over a buffered character source.
///
/// The lexer holds exclusive access to its cursor for its entire lifetime.
/// Once [`next_token`](Self::next_token) has returned an
/// [`EndOfInput`](TokenKind::EndOfInput) token, every further call returns
/// the same — the source is never un-exhausted.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer reading from the start of `buffer`.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            cursor: buffer.cursor(),
        }
    }

    /// Produce the next token.
    ///
    /// Errors are fatal: after an `Err` the stream position is unspecified
    /// and the caller must abort tokenization.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();

        let Some(ch) = self.cursor.current() else {
            return Ok(Token::end_of_input());
        };

        match ch {
            '"' => self.string(),
            '0'..='9' => self.number(),
            '.' => {
                if self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
                    // leading-dot float like `.5`
                    self.number()
                } else {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::Dot, "."))
                }
            }
            c if is_word_start(c) => Ok(self.word()),
            _ => self.operator(ch),
        }
    }

    /// Skip whitespace and `#` line comments until a significant character
    /// or end of input.
    ///
    /// Line breaks carry no significance. A comment runs to the next
    /// newline, which is consumed as part of the comment.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                Some(' ' | '\t' | '\n' | '\r') => self.cursor.advance(),
                Some('#') => {
                    self.cursor.eat_until_newline_or_eof();
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    /// Identifiers, keywords, type names, booleans, and collection names.
    ///
    /// Reserved words win; otherwise a capitalized first letter marks a
    /// collection name, the language's convention for container types.
    fn word(&mut self) -> Token {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_word_part);
        let text = self.cursor.slice_from(start);

        let kind = keywords::lookup(text).unwrap_or_else(|| {
            if text.chars().next().is_some_and(char::is_uppercase) {
                TokenKind::Collection
            } else {
                TokenKind::Identifier
            }
        });
        Token::new(kind, text)
    }

    /// Numeric literals.
    ///
    /// A leading `.` gains an implicit `0`; at most one decimal point is
    /// accepted (a second `.` starts the next token). The lexeme is
    /// normalized by dropping leading zeros that are followed by another
    /// digit: `007` → `7`, `00.5` → `0.5`, while `0` and `0.5` stay as
    /// written.
    fn number(&mut self) -> Result<Token, LexError> {
        let Some(first) = self.cursor.current() else {
            // Dispatch never sends EOF here; kept for the contract that a
            // numeric scan cannot start on an exhausted stream.
            return Err(LexError::unexpected_eof_in_number(self.cursor.pos()));
        };

        let mut text = String::new();
        let mut seen_dot = false;

        if first == '.' {
            text.push_str("0.");
            seen_dot = true;
        } else {
            text.push(first);
        }
        self.cursor.advance();

        while let Some(c) = self.cursor.current() {
            if c.is_ascii_digit() {
                text.push(c);
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                text.push('.');
            } else {
                break;
            }
            self.cursor.advance();
        }

        strip_leading_zeros(&mut text);

        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Ok(Token::new(kind, text))
    }

    /// String literals with `\n`, `\\`, and `\"` escapes.
    ///
    /// Everything else — raw newlines included — is copied verbatim into
    /// the value. The delimiting quotes are not part of the token text.
    fn string(&mut self) -> Result<Token, LexError> {
        self.cursor.advance(); // opening `"`
        let mut value = String::new();

        loop {
            let pos = self.cursor.pos();
            match self.cursor.current() {
                None => return Err(LexError::unterminated_string(pos)),
                Some('"') => {
                    self.cursor.advance();
                    return Ok(Token::new(TokenKind::String, value));
                }
                Some('\\') => {
                    self.cursor.advance();
                    match self.cursor.current() {
                        None => return Err(LexError::unterminated_escape(pos)),
                        Some('n') => value.push('\n'),
                        Some('\\') => value.push('\\'),
                        Some('"') => value.push('"'),
                        Some(other) => return Err(LexError::unknown_escape(pos, other)),
                    }
                    self.cursor.advance();
                }
                Some(c) => {
                    value.push(c);
                    self.cursor.advance();
                }
            }
        }
    }

    /// Operators and punctuation.
    ///
    /// Multi-character operators are disambiguated with `current`/`peek`
    /// lookahead; on mismatch nothing beyond the operator itself has been
    /// consumed. `first` is the dispatch character, not yet consumed.
    fn operator(&mut self, first: char) -> Result<Token, LexError> {
        let pos = self.cursor.pos();
        self.cursor.advance();

        match first {
            '=' => match self.cursor.current() {
                Some('=') => {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::Equal, "=="))
                }
                Some('/') => {
                    // `=/` commits to `=/=`; anything else is malformed
                    if self.cursor.peek() == Some('=') {
                        self.cursor.advance();
                        self.cursor.advance();
                        Ok(Token::new(TokenKind::NotEqual, "=/="))
                    } else {
                        Err(LexError::incomplete_not_equal(pos))
                    }
                }
                _ => Ok(Token::new(TokenKind::Assign, "=")),
            },
            '<' => {
                if self.cursor.current() == Some('=') {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::LessEqual, "<="))
                } else {
                    Ok(Token::new(TokenKind::Less, "<"))
                }
            }
            '>' => {
                if self.cursor.current() == Some('=') {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::GreaterEqual, ">="))
                } else {
                    Ok(Token::new(TokenKind::Greater, ">"))
                }
            }
            '&' => {
                if self.cursor.current() == Some('&') {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::And, "&&"))
                } else {
                    Err(LexError::lone_ampersand(pos))
                }
            }
            '|' => {
                if self.cursor.current() == Some('|') {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::Or, "||"))
                } else {
                    Err(LexError::lone_pipe(pos))
                }
            }
            '+' => Ok(Token::new(TokenKind::Plus, "+")),
            '-' => Ok(Token::new(TokenKind::Minus, "-")),
            '*' => Ok(Token::new(TokenKind::Star, "*")),
            '/' => Ok(Token::new(TokenKind::Slash, "/")),
            '%' => Ok(Token::new(TokenKind::Percent, "%")),
            '(' => Ok(Token::new(TokenKind::LParen, "(")),
            ')' => Ok(Token::new(TokenKind::RParen, ")")),
            '{' => Ok(Token::new(TokenKind::LBrace, "{")),
            '}' => Ok(Token::new(TokenKind::RBrace, "}")),
            '[' => Ok(Token::new(TokenKind::LBracket, "[")),
            ']' => Ok(Token::new(TokenKind::RBracket, "]")),
            ';' => Ok(Token::new(TokenKind::Semicolon, ";")),
            ',' => Ok(Token::new(TokenKind::Comma, ",")),
            other => Err(LexError::unrecognized_char(pos, other)),
        }
    }
}

/// First character of a word: a letter or `_`.
fn is_word_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Continuation of a word: a letter, digit, or `_`.
fn is_word_part(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Drop leading zeros that are followed by another digit.
///
/// Applied to the whole literal, so the integer part never vanishes:
/// `007` → `7`, `00.5` → `0.5`, `0` and `0.5` are untouched.
fn strip_leading_zeros(text: &mut String) {
    let bytes = text.as_bytes();
    let mut drop = 0;
    while bytes[drop] == b'0' && bytes.get(drop + 1).is_some_and(u8::is_ascii_digit) {
        drop += 1;
    }
    if drop > 0 {
        text.drain(..drop);
    }
}
