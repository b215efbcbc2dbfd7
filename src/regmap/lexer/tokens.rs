//! Token definitions for the regmap language
//!
//! The token kinds are defined using the logos derive macro. Keywords are not
//! part of the logos automaton: identifiers are reclassified through a static
//! keyword table after they are matched.

use logos::Logos;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Reserved words, looked up for every identifier-shaped lexeme
static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("block", TokenKind::BlockKeyword),
        ("register", TokenKind::RegisterKeyword),
        ("field", TokenKind::FieldKeyword),
    ])
});

/// Parameter names, matched ahead of the identifier rule
const PARAMETER_WORDS: [&str; 3] = ["offset", "lsb", "size"];

/// All possible token kinds in the regmap language
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\n]+")]
pub enum TokenKind {
    #[serde(rename = "BLOCK_KEYWORD")]
    BlockKeyword,
    #[serde(rename = "REGISTER_KEYWORD")]
    RegisterKeyword,
    #[serde(rename = "FIELD_KEYWORD")]
    FieldKeyword,

    // Exact words; identifiers that start with one are split by the lexer
    #[token("offset")]
    #[token("lsb")]
    #[token("size")]
    #[serde(rename = "PARAMETER_NAME")]
    ParameterName,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    #[serde(rename = "ID")]
    Identifier,

    #[regex(r"[0-9]+(\.[0-9]+)?|\.[0-9]+|0x[0-9a-fA-F]+")]
    #[serde(rename = "NUMBER_LITERAL")]
    NumberLiteral,

    #[token("{")]
    #[serde(rename = "{")]
    OpenBrace,
    #[token("}")]
    #[serde(rename = "}")]
    CloseBrace,
}

impl TokenKind {
    /// Look up a reserved word
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS.get(text).copied()
    }

    /// Reclassify identifiers that spell a keyword
    pub(crate) fn classify(self, text: &str) -> TokenKind {
        match self {
            TokenKind::Identifier => TokenKind::keyword(text).unwrap_or(self),
            other => other,
        }
    }

    /// Length of the parameter name an identifier-shaped lexeme starts with,
    /// when the lexeme is longer than that name
    pub(crate) fn parameter_prefix(text: &str) -> Option<usize> {
        PARAMETER_WORDS
            .iter()
            .find(|word| text.len() > word.len() && text.starts_with(*word))
            .map(|word| word.len())
    }

    /// Name used in token dumps
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::BlockKeyword => "BLOCK_KEYWORD",
            TokenKind::RegisterKeyword => "REGISTER_KEYWORD",
            TokenKind::FieldKeyword => "FIELD_KEYWORD",
            TokenKind::ParameterName => "PARAMETER_NAME",
            TokenKind::Identifier => "ID",
            TokenKind::NumberLiteral => "NUMBER_LITERAL",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed token: its kind, the literal text and the 1-based line it starts on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}
