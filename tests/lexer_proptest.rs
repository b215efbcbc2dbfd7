//! Property-based tests for the regmap lexer
//!
//! The lexer must never panic, must report monotonic line numbers, and must
//! agree with the newline count of the input.

use proptest::prelude::*;
use regmap::regmap::lexer::{tokenize, Lexer, TokenKind};

/// Any mix of valid lexemes separated by whitespace
fn lexeme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("block".to_string()),
        Just("register".to_string()),
        Just("field".to_string()),
        Just("offset".to_string()),
        Just("lsb".to_string()),
        Just("size".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        "[A-Za-z_][A-Za-z0-9_]{0,8}",
        "[0-9]{1,6}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
        "\\.[0-9]{1,3}",
        "0x[0-9a-fA-F]{1,8}",
    ]
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![" ", "\t", "\n", "\n\n", " \n\t"]
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((lexeme_strategy(), separator_strategy()), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(lexeme, sep)| format!("{}{}", lexeme, sep))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_lexer_never_panics(input in "\\PC*") {
        let _ = tokenize(&input);
    }

    #[test]
    fn test_valid_lexemes_always_lex(input in source_strategy()) {
        let tokens = tokenize(&input);
        prop_assert!(tokens.is_ok(), "failed to lex {:?}: {:?}", input, tokens);
    }

    #[test]
    fn test_lines_are_monotonic(input in source_strategy()) {
        let tokens = tokenize(&input).expect("valid lexemes");
        let max_line = input.matches('\n').count() + 1;
        let mut previous = 1;
        for token in &tokens {
            prop_assert!(token.line >= previous);
            prop_assert!(token.line <= max_line);
            previous = token.line;
        }
    }

    #[test]
    fn test_token_text_is_verbatim(input in source_strategy()) {
        let tokens = tokenize(&input).expect("valid lexemes");
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(rebuilt, stripped);
    }

    #[test]
    fn test_parameter_names_never_identifiers(name in prop_oneof!["offset", "lsb", "size"]) {
        let tokens = tokenize(&name).expect("parameter name lexes");
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::ParameterName);
    }

    #[test]
    fn test_lexer_stops_at_first_error(prefix in source_strategy(), bad in "[$#@!;=]") {
        let input = format!("{}{}", prefix, bad);
        let results: Vec<_> = Lexer::new(&input).collect();
        let errors = results.iter().filter(|r| r.is_err()).count();
        prop_assert_eq!(errors, 1);
        prop_assert!(results.last().is_some_and(|r| r.is_err()));
    }
}
