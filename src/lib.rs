//! # regmap
//!
//! A front-end compiler for a small register map description language.
//!
//! Sources declare nested `block` → `register` → `field` items carrying integer
//! parameters (`offset`, `lsb`, `size`), plus instantiation statements that bind an
//! instance name to a block type:
//!
//! ```text
//! block uart {
//!     offset 0x4000
//!     register ctrl {
//!         offset 0x0 size 4
//!         field enable { lsb 0 size 1 }
//!     }
//! }
//! uart uart0
//! ```
//!
//! The [driver](regmap::driver) runs the [lexer](regmap::lexer) and the
//! [parser](regmap::parser) over a source and hands back a [`Specification`].

pub mod regmap;

pub use regmap::ast::{
    BlockDecl, Declaration, FieldDecl, InstantiationDecl, ParameterName, Parameters,
    RegisterDecl, Specification,
};
pub use regmap::driver::{parse, Driver};
pub use regmap::error::{LexicalError, LoadError, ParseError};
