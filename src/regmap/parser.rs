//! Parser for the regmap language using chumsky
//!
//! The grammar is assembled once into a [`Grammar`] value. It is immutable and
//! can be shared between threads; every call to [`Grammar::parse`] works on its
//! own token vector and builds its own tree.

pub mod assembly;
pub(crate) mod combinators;

use std::sync::Arc;

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use chumsky::Stream;
use tracing::debug;

use crate::regmap::ast::Specification;
use crate::regmap::error::ParseError;
use crate::regmap::lexer::Token;

use combinators::ParserError;

pub use assembly::{Assemble, BodyItem};

type SpecificationParser = dyn Parser<Token, Specification, Error = ParserError> + Send + Sync;

/// The compiled regmap grammar
#[derive(Clone)]
pub struct Grammar {
    parser: Arc<SpecificationParser>,
}

impl Grammar {
    pub fn new() -> Self {
        Self {
            parser: Arc::new(combinators::specification()),
        }
    }

    /// Parse a complete token sequence.
    ///
    /// Fails on the first error in source order; no partial tree is returned.
    pub fn parse(&self, tokens: &[Token]) -> Result<Specification, ParseError> {
        debug!(tokens = tokens.len(), "parsing token stream");
        // Spans are token indices; end of input is `len..len + 1`
        let len = tokens.len();
        let stream = Stream::from_iter(
            len..len + 1,
            tokens
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, token)| (token, i..i + 1)),
        );
        self.parser
            .parse(stream)
            .map_err(|errors| first_error(tokens, errors))
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar").finish_non_exhaustive()
    }
}

/// Pick the earliest error and convert it.
///
/// Spans are indices into `tokens`; end of input is `tokens.len()`.
fn first_error(tokens: &[Token], errors: Vec<ParserError>) -> ParseError {
    debug!(count = errors.len(), "parse failed");
    errors
        .into_iter()
        .min_by_key(|err| err.span().start)
        .map(|err| convert_error(tokens, err))
        .unwrap_or(ParseError::Syntax {
            line: None,
            found: None,
        })
}

fn convert_error(tokens: &[Token], err: ParserError) -> ParseError {
    match err.reason() {
        // Only number coercion raises custom errors
        SimpleReason::Custom(_) => match tokens.get(err.span().start) {
            Some(token) => ParseError::InvalidNumber {
                line: token.line,
                literal: token.text.clone(),
            },
            None => ParseError::Syntax {
                line: None,
                found: None,
            },
        },
        _ => {
            let found = err.found().or_else(|| tokens.get(err.span().start));
            ParseError::Syntax {
                line: found.map(|t| t.line),
                found: found.map(|t| t.text.clone()),
            }
        }
    }
}
