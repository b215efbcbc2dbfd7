//! The root of a parsed source

use serde::Serialize;

use super::elements::{BlockDecl, Declaration, InstantiationDecl};

/// Top-level declarations in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Specification {
    declarations: Vec<Declaration>,
}

impl Specification {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &BlockDecl> {
        self.declarations.iter().filter_map(Declaration::as_block)
    }

    pub fn instantiations(&self) -> impl Iterator<Item = &InstantiationDecl> {
        self.declarations
            .iter()
            .filter_map(Declaration::as_instantiation)
    }
}

impl From<Vec<Declaration>> for Specification {
    fn from(declarations: Vec<Declaration>) -> Self {
        Self::new(declarations)
    }
}

impl<'a> IntoIterator for &'a Specification {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Specification {
    type Item = Declaration;
    type IntoIter = std::vec::IntoIter<Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.into_iter()
    }
}
