//! Declaration elements
//!
//! One file per declaration kind, plus the [`Declaration`] sum type that
//! carries any of them.

pub mod block;
pub mod declaration;
pub mod field;
pub mod instantiation;
pub mod register;

pub use block::BlockDecl;
pub use declaration::Declaration;
pub use field::FieldDecl;
pub use instantiation::InstantiationDecl;
pub use register::RegisterDecl;
