//! Declaration tree for regmap sources
//!
//! The tree is built in a single pass by the parser and is never mutated
//! afterwards. Ownership passes entirely to the caller of the driver.
//!
//! Serialization follows the historical JSON dump: parameters are flattened
//! into their node, empty child lists are omitted, and instantiations use the
//! `class` / `inst` keys.

pub mod elements;
pub mod parameters;
pub mod specification;

pub use elements::{BlockDecl, Declaration, FieldDecl, InstantiationDecl, RegisterDecl};
pub use parameters::{ParameterName, Parameters, UnknownParameter};
pub use specification::Specification;
