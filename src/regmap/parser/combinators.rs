//! Parser combinator functions for the regmap grammar
//!
//! ```text
//! Specification     := (BlockDecl | InstantiationDecl)*
//! BlockDecl         := 'block' Identifier '{' (Parameter | RegisterDecl)* '}'
//! RegisterDecl      := 'register' Identifier '{' (Parameter | FieldDecl)* '}'
//! FieldDecl         := 'field' Identifier '{' Parameter* '}'
//! Parameter         := ParamName NumberLiteral
//! InstantiationDecl := Identifier Identifier
//! ```

use chumsky::prelude::*;

use super::assembly::{Assemble, BodyItem};
use crate::regmap::ast::{
    BlockDecl, Declaration, FieldDecl, InstantiationDecl, ParameterName, RegisterDecl,
    Specification,
};
use crate::regmap::lexer::{Token, TokenKind};

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Why a number literal cannot be a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberError {
    Fractional,
    Overflow,
}

/// Coerce a `NumberLiteral` to an integer parameter value.
///
/// Accepts decimal and `0x` hexadecimal integers. Fractional literals are
/// lexically valid but rejected here.
pub(crate) fn coerce_number(literal: &str) -> Result<u64, NumberError> {
    if let Some(hex) = literal.strip_prefix("0x") {
        return u64::from_str_radix(hex, 16).map_err(|_| NumberError::Overflow);
    }
    if literal.contains('.') {
        return Err(NumberError::Fractional);
    }
    literal.parse::<u64>().map_err(|_| NumberError::Overflow)
}

/// Helper: match a token of the given kind
pub(crate) fn kind(expected: TokenKind) -> impl Parser<Token, Token, Error = ParserError> + Clone {
    filter(move |t: &Token| t.kind == expected)
}

pub(crate) fn identifier() -> impl Parser<Token, String, Error = ParserError> + Clone {
    kind(TokenKind::Identifier).map(|t| t.text)
}

fn parameter_name() -> impl Parser<Token, ParameterName, Error = ParserError> + Clone {
    filter_map(|span, t: Token| match t.kind {
        TokenKind::ParameterName => t
            .text
            .parse::<ParameterName>()
            .map_err(|_| Simple::expected_input_found(span, Vec::new(), Some(t))),
        _ => Err(Simple::expected_input_found(span, Vec::new(), Some(t))),
    })
}

/// A number literal coerced to a parameter value.
///
/// A bad literal fails the parse at its own token with a custom error, so no
/// later error can be reported ahead of it.
fn parameter_value() -> impl Parser<Token, u64, Error = ParserError> + Clone {
    kind(TokenKind::NumberLiteral).try_map(|t, span| {
        coerce_number(&t.text).map_err(|err| {
            Simple::custom(
                span,
                format!("invalid parameter value '{}': {:?}", t.text, err),
            )
        })
    })
}

/// `Parameter := ParamName NumberLiteral`
pub(crate) fn parameter<C>() -> impl Parser<Token, BodyItem<C>, Error = ParserError> + Clone {
    parameter_name()
        .then(parameter_value())
        .map(|(name, value)| BodyItem::Parameter(name, value))
}

/// `Parameter | Child`
fn body_item<C, P>(child: P) -> impl Parser<Token, BodyItem<C>, Error = ParserError> + Clone
where
    P: Parser<Token, C, Error = ParserError> + Clone,
{
    parameter().or(child.map(BodyItem::Child))
}

/// `keyword Identifier '{' item* '}'`, assembled into `N`
fn declaration<N, P>(
    keyword: TokenKind,
    item: P,
) -> impl Parser<Token, N, Error = ParserError> + Clone
where
    N: Assemble,
    P: Parser<Token, BodyItem<N::Child>, Error = ParserError> + Clone,
{
    kind(keyword)
        .ignore_then(identifier())
        .then(
            item.repeated()
                .delimited_by(kind(TokenKind::OpenBrace), kind(TokenKind::CloseBrace)),
        )
        .map(|(name, items)| N::assemble(name, items))
}

pub(crate) fn field_decl() -> impl Parser<Token, FieldDecl, Error = ParserError> + Clone {
    declaration::<FieldDecl, _>(TokenKind::FieldKeyword, parameter())
}

pub(crate) fn register_decl() -> impl Parser<Token, RegisterDecl, Error = ParserError> + Clone {
    declaration::<RegisterDecl, _>(TokenKind::RegisterKeyword, body_item(field_decl()))
}

pub(crate) fn block_decl() -> impl Parser<Token, BlockDecl, Error = ParserError> + Clone {
    declaration::<BlockDecl, _>(TokenKind::BlockKeyword, body_item(register_decl()))
}

/// `InstantiationDecl := Identifier Identifier`
pub(crate) fn instantiation_decl(
) -> impl Parser<Token, InstantiationDecl, Error = ParserError> + Clone {
    identifier()
        .then(identifier())
        .map(|(class_name, instance_name)| InstantiationDecl::new(class_name, instance_name))
}

/// The whole source; must consume every token
pub(crate) fn specification() -> impl Parser<Token, Specification, Error = ParserError> + Clone {
    block_decl()
        .map(Declaration::Block)
        .or(instantiation_decl().map(Declaration::Instantiation))
        .repeated()
        .then_ignore(end())
        .map(Specification::new)
}
