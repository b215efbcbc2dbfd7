//! Format registry for specification output
//!
//! Each format implements the `Formatter` trait and can be registered with
//! `FormatRegistry` under its name.

use crate::regmap::ast::Specification;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for specification formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "json", "treeviz")
    fn name(&self) -> &str;

    /// Render a specification in this format
    fn serialize(&self, spec: &Specification) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of specification formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Render a specification using the named format
    pub fn serialize(&self, spec: &Specification, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(spec)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry with the built-in formats; JSON uses the given indent width
    pub fn with_json_indent(indent: usize) -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter::new(indent));
        registry.register(super::YamlFormatter);
        registry.register(super::TreevizFormatter);

        registry
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        Self::with_json_indent(super::serialized::DEFAULT_JSON_INDENT)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
