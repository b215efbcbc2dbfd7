//! Lexer module for the regmap language
//!
//! This module contains the token definitions and the lazy, line-tracking
//! lexer built on top of the logos automaton.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, Lexer};
pub use tokens::{Token, TokenKind};
