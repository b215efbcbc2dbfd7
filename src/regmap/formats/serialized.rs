//! JSON and YAML renderings of a specification, via serde

use serde::Serialize;

use super::registry::{FormatError, Formatter};
use crate::regmap::ast::Specification;

pub const DEFAULT_JSON_INDENT: usize = 2;

/// Pretty JSON with `indent` spaces per level
pub fn to_json(spec: &Specification, indent: usize) -> Result<String, FormatError> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    spec.serialize(&mut serializer)
        .map_err(|e| FormatError::SerializationError(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub fn to_yaml(spec: &Specification) -> Result<String, FormatError> {
    serde_yaml::to_string(spec).map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub struct JsonFormatter {
    indent: usize,
}

impl JsonFormatter {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_JSON_INDENT)
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, spec: &Specification) -> Result<String, FormatError> {
        to_json(spec, self.indent)
    }

    fn description(&self) -> &str {
        "Indented JSON document"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, spec: &Specification) -> Result<String, FormatError> {
        to_yaml(spec)
    }

    fn description(&self) -> &str {
        "YAML document"
    }
}
