//! Key Constraint Value Object
//!
//! The declared key type of a region. Only a string constraint unlocks
//! batched removal; anything else is an opaque type name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared key type of a region
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KeyConstraint {
    /// Keys are strings
    String,
    /// Any other declared key type, by name
    Other(String),
}

impl KeyConstraint {
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }
}

impl From<String> for KeyConstraint {
    fn from(name: String) -> Self {
        if name == "string" {
            Self::String
        } else {
            Self::Other(name)
        }
    }
}

impl From<&str> for KeyConstraint {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<KeyConstraint> for String {
    fn from(constraint: KeyConstraint) -> Self {
        constraint.to_string()
    }
}

impl fmt::Display for KeyConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Other(name) => f.write_str(name),
        }
    }
}
