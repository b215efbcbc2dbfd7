//! Implementation of the regmap lexer
//!
//! Logos does the matching; this wrapper attaches line numbers, applies the
//! keyword table and turns unmatched input into a [`LexicalError`].
//!
//! Parameter names take priority over identifiers at any position, so an
//! identifier that starts with one is split and lexing resumes right after
//! the parameter name.

use std::iter::FusedIterator;

use logos::Logos;

use crate::regmap::error::LexicalError;
use crate::regmap::lexer::tokens::{Token, TokenKind};

/// Lazy token stream over a source string
///
/// The stream ends at end of input or right after the first lexical error.
/// A new `Lexer` has to be created to start over.
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, TokenKind>,
    // Offset of `inner`'s input within `source`
    base: usize,
    line: usize,
    scanned: usize,
    failed: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source),
            base: 0,
            line: 1,
            scanned: 0,
            failed: false,
        }
    }

    // Newlines are skipped by logos, so count the ones in the gap since the last token.
    fn advance_to(&mut self, offset: usize) {
        if offset > self.scanned {
            self.line += self.source[self.scanned..offset]
                .bytes()
                .filter(|b| *b == b'\n')
                .count();
            self.scanned = offset;
        }
    }

    /// Restart matching at `offset`
    fn resume_at(&mut self, offset: usize) {
        self.inner = TokenKind::lexer(&self.source[offset..]);
        self.base = offset;
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.inner.next()?;
        let span = self.inner.span();
        let start = self.base + span.start;
        let end = self.base + span.end;
        self.advance_to(start);
        let source: &'src str = self.source;

        match result {
            Ok(TokenKind::Identifier) => {
                let text = &source[start..end];
                match TokenKind::parameter_prefix(text) {
                    // `offsets` is `offset` followed by whatever `s` lexes as
                    Some(len) => {
                        self.resume_at(start + len);
                        Some(Ok(Token::new(
                            TokenKind::ParameterName,
                            &text[..len],
                            self.line,
                        )))
                    }
                    None => Some(Ok(Token::new(
                        TokenKind::Identifier.classify(text),
                        text,
                        self.line,
                    ))),
                }
            }
            Ok(kind) => Some(Ok(Token::new(kind, &source[start..end], self.line))),
            Err(()) => {
                self.failed = true;
                // The error span may stop inside a multi-byte character
                let character = source[start..].chars().next().unwrap_or('\u{FFFD}');
                Some(Err(LexicalError {
                    line: self.line,
                    character,
                }))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Convenience function to tokenize a whole string, stopping at the first error
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source).collect()
}
