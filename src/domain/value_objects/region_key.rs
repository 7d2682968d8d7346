//! Region Key Value Object

use std::fmt;

use serde::{Deserialize, Serialize};

/// A key stored in a region
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionKey {
    Int(i64),
    Str(String),
}

impl RegionKey {
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl From<&str> for RegionKey {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for RegionKey {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for RegionKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_keys() {
        let keys: Vec<RegionKey> = serde_json::from_str(r#"[1, "a", -7]"#).unwrap();
        assert_eq!(
            keys,
            vec![RegionKey::Int(1), RegionKey::from("a"), RegionKey::Int(-7)]
        );
    }
}
