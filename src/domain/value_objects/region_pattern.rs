//! Region Name Pattern Value Object
//!
//! A region name as typed by the user. Names containing `*` or `?` are glob
//! patterns and get expanded against the root-region catalog; everything else
//! is taken literally.

use std::fmt;

use regex::Regex;
use thiserror::Error;

/// Error produced when a glob pattern does not translate to a valid expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("invalid region pattern '{pattern}': {message}")]
    Invalid { pattern: String, message: String },
}

/// A literal region name or a glob pattern over region names
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionNamePattern {
    /// Exact region identifier
    Literal(String),
    /// Pattern containing `*` and/or `?`
    Glob(String),
}

impl RegionNamePattern {
    /// Classify a raw name
    pub fn parse(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.contains(['*', '?']) {
            Self::Glob(name)
        } else {
            Self::Literal(name)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(name) | Self::Glob(name) => name,
        }
    }

    pub fn is_glob(&self) -> bool {
        matches!(self, Self::Glob(_))
    }

    /// Expression source for this pattern.
    ///
    /// `*` becomes `.*` and `?` becomes `.?`. No other character is escaped,
    /// so `.` or `+` inside a name keep their regex meaning.
    pub fn to_regex_source(&self) -> String {
        self.as_str().replace('*', ".*").replace('?', ".?")
    }

    /// Compile into a matcher anchored on the whole region name
    pub fn compile(&self) -> Result<RegionMatcher, PatternError> {
        let anchored = format!("^(?:{})$", self.to_regex_source());
        let regex = Regex::new(&anchored).map_err(|e| PatternError::Invalid {
            pattern: self.as_str().to_string(),
            message: e.to_string().lines().last().unwrap_or_default().trim().to_string(),
        })?;

        Ok(RegionMatcher {
            pattern: self.clone(),
            regex,
        })
    }
}

impl fmt::Display for RegionNamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for RegionNamePattern {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for RegionNamePattern {
    fn from(name: String) -> Self {
        Self::parse(name)
    }
}

/// Compiled form of a [`RegionNamePattern`]
#[derive(Debug, Clone)]
pub struct RegionMatcher {
    pattern: RegionNamePattern,
    regex: Regex,
}

impl RegionMatcher {
    pub fn pattern(&self) -> &RegionNamePattern {
        &self.pattern
    }

    /// True when `name` matches the pattern in full
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}
