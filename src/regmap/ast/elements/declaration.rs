//! Declaration sum type

use serde::Serialize;

use super::{BlockDecl, FieldDecl, InstantiationDecl, RegisterDecl};
use crate::regmap::ast::parameters::Parameters;

/// Any declaration the parser can produce
///
/// Only `Block` and `Instantiation` appear at the top level of a
/// [`Specification`](crate::regmap::ast::Specification); registers and fields
/// live in the typed child lists of their parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Declaration {
    Block(BlockDecl),
    Register(RegisterDecl),
    Field(FieldDecl),
    Instantiation(InstantiationDecl),
}

impl Declaration {
    pub fn node_type(&self) -> &'static str {
        match self {
            Declaration::Block(_) => "Block",
            Declaration::Register(_) => "Register",
            Declaration::Field(_) => "Field",
            Declaration::Instantiation(_) => "Instantiation",
        }
    }

    /// Declared name; for instantiations, the instance name
    pub fn name(&self) -> &str {
        match self {
            Declaration::Block(b) => &b.name,
            Declaration::Register(r) => &r.name,
            Declaration::Field(f) => &f.name,
            Declaration::Instantiation(i) => &i.instance_name,
        }
    }

    pub fn parameters(&self) -> Option<&Parameters> {
        match self {
            Declaration::Block(b) => Some(&b.parameters),
            Declaration::Register(r) => Some(&r.parameters),
            Declaration::Field(f) => Some(&f.parameters),
            Declaration::Instantiation(_) => None,
        }
    }

    pub fn as_block(&self) -> Option<&BlockDecl> {
        match self {
            Declaration::Block(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_instantiation(&self) -> Option<&InstantiationDecl> {
        match self {
            Declaration::Instantiation(i) => Some(i),
            _ => None,
        }
    }
}

impl From<BlockDecl> for Declaration {
    fn from(block: BlockDecl) -> Self {
        Declaration::Block(block)
    }
}

impl From<RegisterDecl> for Declaration {
    fn from(register: RegisterDecl) -> Self {
        Declaration::Register(register)
    }
}

impl From<FieldDecl> for Declaration {
    fn from(field: FieldDecl) -> Self {
        Declaration::Field(field)
    }
}

impl From<InstantiationDecl> for Declaration {
    fn from(inst: InstantiationDecl) -> Self {
        Declaration::Instantiation(inst)
    }
}
