//! Instantiation element definition

use serde::Serialize;
use std::fmt;

/// `ClassName instance_name` at the top level
///
/// The class name is not checked against the declared blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstantiationDecl {
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(rename = "inst")]
    pub instance_name: String,
}

impl InstantiationDecl {
    pub fn new(class_name: impl Into<String>, instance_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            instance_name: instance_name.into(),
        }
    }
}

impl fmt::Display for InstantiationDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class_name, self.instance_name)
    }
}
