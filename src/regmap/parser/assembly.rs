//! Node assembly
//!
//! Every production nested inside a declaration body yields a [`BodyItem`]:
//! either a parameter assignment or a finished child node. The enclosing
//! production folds those items into its node in encounter order, so
//! parameters and children may be interleaved freely in the source.

use std::convert::Infallible;

use tracing::trace;

use crate::regmap::ast::{BlockDecl, FieldDecl, ParameterName, Parameters, RegisterDecl};

/// Result of one production inside a `*Body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyItem<C> {
    Parameter(ParameterName, u64),
    Child(C),
}

/// A declaration node that can be built from its name and body items
pub trait Assemble: Sized {
    /// Node type accepted in this declaration's child list
    type Child;

    /// Keyword used in diagnostics
    const KIND: &'static str;

    fn named(name: String) -> Self;

    fn parameters_mut(&mut self) -> &mut Parameters;

    fn push_child(&mut self, child: Self::Child);

    /// Fold body items into a fresh node.
    ///
    /// Parameters overwrite earlier values of the same name; children are
    /// appended, duplicates included.
    fn assemble(name: String, items: Vec<BodyItem<Self::Child>>) -> Self {
        let mut node = Self::named(name);
        for item in items {
            match item {
                BodyItem::Parameter(name, value) => {
                    if let Some(previous) = node.parameters_mut().set(name, value) {
                        trace!(kind = Self::KIND, %name, previous, value, "parameter overwritten");
                    }
                }
                BodyItem::Child(child) => node.push_child(child),
            }
        }
        trace!(kind = Self::KIND, "assembled node");
        node
    }
}

impl Assemble for BlockDecl {
    type Child = RegisterDecl;
    const KIND: &'static str = "block";

    fn named(name: String) -> Self {
        BlockDecl::new(name)
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    fn push_child(&mut self, child: RegisterDecl) {
        self.registers.push(child);
    }
}

impl Assemble for RegisterDecl {
    type Child = FieldDecl;
    const KIND: &'static str = "register";

    fn named(name: String) -> Self {
        RegisterDecl::new(name)
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    fn push_child(&mut self, child: FieldDecl) {
        self.fields.push(child);
    }
}

impl Assemble for FieldDecl {
    // Field bodies only hold parameters
    type Child = Infallible;
    const KIND: &'static str = "field";

    fn named(name: String) -> Self {
        FieldDecl::new(name)
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    fn push_child(&mut self, child: Infallible) {
        match child {}
    }
}
