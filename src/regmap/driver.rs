//! Driver: lexer and parser over a complete source
//!
//! The whole source is read before parsing starts; there is no incremental or
//! streaming mode. Failures are returned to the caller, never turned into a
//! process exit here.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, debug_span, Level};

use crate::regmap::ast::{Declaration, Specification};
use crate::regmap::error::{LoadError, ParseError};
use crate::regmap::lexer::tokenize;
use crate::regmap::parser::Grammar;

/// Owns the grammar and runs parses against it
#[derive(Debug, Clone, Default)]
pub struct Driver {
    grammar: Grammar,
    trace_parse: bool,
}

impl Driver {
    /// Build the grammar once; reuse the driver for any number of parses.
    pub fn new() -> Self {
        Self {
            grammar: Grammar::new(),
            trace_parse: false,
        }
    }

    /// Also log every token and every top-level declaration at debug level
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.trace_parse = enabled;
        self
    }

    /// Parse source text that is already in memory
    pub fn parse_str(&self, source: &str) -> Result<Specification, ParseError> {
        let tokens = tokenize(source)?;
        debug!(tokens = tokens.len(), bytes = source.len(), "lexed source");
        if self.trace_parse {
            for token in &tokens {
                debug!(line = token.line, kind = %token.kind, text = %token.text, "token");
            }
        }

        let spec = self.grammar.parse(&tokens)?;
        debug!(declarations = spec.len(), "parsed specification");
        if self.trace_parse {
            spec.iter().for_each(log_declaration);
        }
        Ok(spec)
    }

    /// Read the whole stream, then parse it
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Specification, LoadError> {
        let text = read_all(reader)?;
        self.load(text)
    }

    /// Read a file fully, once, then parse it
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Specification, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: Some(path.to_path_buf()),
            source,
        })?;
        debug!(path = %path.display(), "read source file");
        self.load(text)
    }

    fn load(&self, text: String) -> Result<Specification, LoadError> {
        match self.parse_str(&text) {
            Ok(spec) => Ok(spec),
            Err(error) => Err(LoadError::Parse { error, text }),
        }
    }
}

fn log_declaration(declaration: &Declaration) {
    match declaration {
        Declaration::Block(block) => debug!(
            name = %block.name,
            parameters = %block.parameters,
            registers = block.registers.len(),
            "block"
        ),
        Declaration::Instantiation(inst) => debug!(
            class = %inst.class_name,
            instance = %inst.instance_name,
            "instantiation"
        ),
        other => debug!(kind = other.node_type(), name = other.name(), "declaration"),
    }
}

fn read_all<R: Read>(mut reader: R) -> Result<String, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io { path: None, source })?;
    Ok(text)
}

/// Read a whole file, or standard input when `path` is `None`
pub fn read_source(path: Option<&Path>) -> Result<String, LoadError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: Some(path.to_path_buf()),
            source,
        }),
        None => read_all(io::stdin().lock()),
    }
}

/// Parse a file, or standard input when `path` is `None`.
///
/// With `debug` set, the token stream and every top-level declaration are
/// logged at debug level; the result is the same either way.
pub fn parse(path: Option<&Path>, debug: bool) -> Result<Specification, LoadError> {
    let span = if debug {
        debug_span!("parse", source = %source_name(path))
    } else {
        tracing::span!(Level::TRACE, "parse", source = %source_name(path))
    };
    let _guard = span.enter();

    let driver = Driver::new().with_debug(debug);
    match path {
        Some(path) => driver.parse_file(path),
        None => driver.parse_reader(io::stdin().lock()),
    }
}

fn source_name(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string())
}
