//! Parameter names and per-node parameter maps

use serde::Serialize;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the three integer attributes a declaration can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterName {
    Offset,
    Lsb,
    Size,
}

impl ParameterName {
    pub const ALL: [ParameterName; 3] =
        [ParameterName::Offset, ParameterName::Lsb, ParameterName::Size];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterName::Offset => "offset",
            ParameterName::Lsb => "lsb",
            ParameterName::Size => "size",
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that is not one of `offset`, `lsb`, `size`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownParameter(pub String);

impl fmt::Display for UnknownParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown parameter name: {}", self.0)
    }
}

impl std::error::Error for UnknownParameter {}

impl FromStr for ParameterName {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offset" => Ok(ParameterName::Offset),
            "lsb" => Ok(ParameterName::Lsb),
            "size" => Ok(ParameterName::Size),
            other => Err(UnknownParameter(other.to_string())),
        }
    }
}

/// Parameter values of a single declaration
///
/// Setting a name that is already present overwrites it: the last value in
/// source order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<ParameterName, u64>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, returning the value it replaced
    pub fn set(&mut self, name: ParameterName, value: u64) -> Option<u64> {
        self.0.insert(name, value)
    }

    pub fn get(&self, name: ParameterName) -> Option<u64> {
        self.0.get(&name).copied()
    }

    pub fn offset(&self) -> Option<u64> {
        self.get(ParameterName::Offset)
    }

    pub fn lsb(&self) -> Option<u64> {
        self.get(ParameterName::Lsb)
    }

    pub fn size(&self) -> Option<u64> {
        self.get(ParameterName::Size)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterName, u64)> + '_ {
        self.0.iter().map(|(name, value)| (*name, *value))
    }
}

impl FromIterator<(ParameterName, u64)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (ParameterName, u64)>>(iter: T) -> Self {
        let mut parameters = Parameters::new();
        for (name, value) in iter {
            parameters.set(name, value);
        }
        parameters
    }
}

impl IntoIterator for Parameters {
    type Item = (ParameterName, u64);
    type IntoIter = btree_map::IntoIter<ParameterName, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", name, value)?;
            first = false;
        }
        Ok(())
    }
}
