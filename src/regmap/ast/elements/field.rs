//! Field element definition

use serde::Serialize;

use super::super::parameters::Parameters;

/// A bit range inside a register
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(flatten)]
    pub parameters: Parameters,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Parameters::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }
}
