//! Block element definition

use serde::Serialize;

use super::super::parameters::Parameters;
use super::register::RegisterDecl;

/// A top-level block grouping registers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockDecl {
    pub name: String,
    #[serde(flatten)]
    pub parameters: Parameters,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub registers: Vec<RegisterDecl>,
}

impl BlockDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Parameters::new(),
            registers: Vec::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_register(mut self, register: RegisterDecl) -> Self {
        self.registers.push(register);
        self
    }

    /// Registers with the given name, in source order
    pub fn registers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RegisterDecl> {
        self.registers.iter().filter(move |r| r.name == name)
    }
}
