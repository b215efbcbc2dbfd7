//! Output formats for specifications and token streams
//!
//! - Specifications render through the [`FormatRegistry`] (json, yaml, treeviz)
//! - Token streams render as `KIND: text` lines or JSON

pub mod registry;
pub mod serialized;
pub mod tokens;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{to_json, to_yaml, JsonFormatter, YamlFormatter};
pub use tokens::{tokens_json, tokens_simple};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
