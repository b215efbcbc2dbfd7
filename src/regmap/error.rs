//! Error types for lexing, parsing and loading regmap sources
//!
//! Every failure is fatal: the first error stops the whole parse and no partial
//! tree is returned alongside it.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Input that matches no lexical rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    pub line: usize,
    pub character: char,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown token on line {}: {:?}",
            self.line, self.character
        )
    }
}

impl std::error::Error for LexicalError {}

/// Errors that can occur while turning source text into a specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer hit a character it does not recognise
    Lexical(LexicalError),
    /// The token sequence matches no production. `line` is `None` when the
    /// error was detected at end of input.
    Syntax {
        line: Option<usize>,
        found: Option<String>,
    },
    /// A number literal that cannot be used as an integer parameter value
    /// (fractional, or too large for `u64`)
    InvalidNumber { line: usize, literal: String },
}

impl ParseError {
    /// Line of the offending input, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Lexical(err) => Some(err.line),
            ParseError::Syntax { line, .. } => *line,
            ParseError::InvalidNumber { line, .. } => Some(*line),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lexical(err) => write!(f, "{}", err),
            ParseError::Syntax {
                line: Some(line),
                found: Some(found),
            } => write!(f, "ERROR(line {}): syntax error near '{}'", line, found),
            ParseError::Syntax { line: Some(line), .. } => {
                write!(f, "ERROR(line {}): syntax error", line)
            }
            ParseError::Syntax { line: None, .. } => {
                write!(f, "ERROR(line unknown): syntax error at end of input")
            }
            ParseError::InvalidNumber { line, literal } => write!(
                f,
                "ERROR(line {}): '{}' is not a valid integer parameter value",
                line, literal
            ),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lexical(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexicalError> for ParseError {
    fn from(err: LexicalError) -> Self {
        ParseError::Lexical(err)
    }
}

/// Errors from the driver, which may also have to read the source first
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
    /// The source was read but did not parse; `text` is what was read
    Parse { error: ParseError, text: String },
}

impl LoadError {
    /// The underlying parse failure, if this was not an I/O problem
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            LoadError::Parse { error, .. } => Some(error),
            LoadError::Io { .. } => None,
        }
    }

    /// Source text the parse failed on
    pub fn source_text(&self) -> Option<&str> {
        match self {
            LoadError::Parse { text, .. } => Some(text),
            LoadError::Io { .. } => None,
        }
    }

    /// The error message, followed by the lines around the failing line
    /// when both are known
    pub fn with_source_context(&self) -> String {
        let mut report = self.to_string();
        if let (Some(text), Some(line)) = (
            self.source_text(),
            self.as_parse_error().and_then(ParseError::line),
        ) {
            let context = format_source_context(text, line);
            if !context.is_empty() {
                report.push_str("\n\n");
                report.push_str(context.trim_end());
            }
        }
        report
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io {
                path: Some(path),
                source,
            } => write!(f, "Error reading {}: {}", path.display(), source),
            LoadError::Io { path: None, source } => {
                write!(f, "Error reading standard input: {}", source)
            }
            LoadError::Parse { error, .. } => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { error, .. } => Some(error),
        }
    }
}

/// Format source code context around an error line
///
/// Shows 2 lines before the error, the error line with a >> marker, and 2 lines after.
/// `line` is 1-based, as reported by the lexer.
pub fn format_source_context(source: &str, line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for line_num in start_line..end_line {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!(
            "{} {:3} | {}\n",
            marker,
            line_num + 1,
            lines[line_num]
        ));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_source_context() {
        let source = "line 1\nline 2\nline 3\nerror line\nline 5\nline 6\nline 7";

        let context = format_source_context(source, 4);

        assert!(context.contains("line 2"));
        assert!(context.contains(">>   4 | error line"));
        assert!(context.contains("line 6"));
        assert!(!context.contains("line 1"));
        assert!(!context.contains("line 7"));
    }

    #[test]
    fn test_format_source_context_past_end() {
        let context = format_source_context("only line", 9);
        assert!(context.is_empty());
    }

    #[test]
    fn test_syntax_error_display() {
        let err = ParseError::Syntax {
            line: Some(3),
            found: Some("}".to_string()),
        };
        assert_eq!(err.to_string(), "ERROR(line 3): syntax error near '}'");

        let eoi = ParseError::Syntax {
            line: None,
            found: None,
        };
        assert_eq!(eoi.line(), None);
        assert!(eoi.to_string().contains("unknown"));
    }

    #[test]
    fn test_load_error_context() {
        let err = LoadError::Parse {
            error: ParseError::Syntax {
                line: Some(2),
                found: Some("}".to_string()),
            },
            text: "block A {\n}\n".to_string(),
        };
        assert_eq!(err.source_text(), Some("block A {\n}\n"));
        assert_eq!(
            err.with_source_context(),
            "ERROR(line 2): syntax error near '}'\n\n     1 | block A {\n>>   2 | }"
        );
    }

    #[test]
    fn test_load_error_without_line_has_no_context() {
        let err = LoadError::Parse {
            error: ParseError::Syntax {
                line: None,
                found: None,
            },
            text: "block A {".to_string(),
        };
        assert_eq!(
            err.with_source_context(),
            "ERROR(line unknown): syntax error at end of input"
        );
    }

    #[test]
    fn test_lexical_error_display() {
        let err = ParseError::from(LexicalError {
            line: 2,
            character: '$',
        });
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.to_string(), "Unknown token on line 2: '$'");
    }
}
