//! Token stream dumps

use super::registry::FormatError;
use crate::regmap::lexer::Token;

/// One `KIND: text` line per token
pub fn tokens_simple(tokens: &[Token]) -> String {
    tokens.iter().map(|t| format!("{}\n", t)).collect()
}

pub fn tokens_json(tokens: &[Token]) -> Result<String, FormatError> {
    serde_json::to_string_pretty(tokens).map_err(|e| FormatError::SerializationError(e.to_string()))
}
