//! Register element definition

use serde::Serialize;

use super::super::parameters::Parameters;
use super::field::FieldDecl;

/// A named register inside a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterDecl {
    pub name: String,
    #[serde(flatten)]
    pub parameters: Parameters,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDecl>,
}

impl RegisterDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Parameters::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }
}
