//! Value kind tags
//!
//! `ValueKind` names the closed set of kinds a structured value can take.
//! It is what callers pass to type-based filters such as
//! `remove_attrs_by_type`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a structured value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    Text,
    Date,
    Sequence,
    Mapping,
    Function,
}

impl ValueKind {
    /// All kinds, in declaration order
    pub const ALL: [ValueKind; 8] = [
        ValueKind::Null,
        ValueKind::Boolean,
        ValueKind::Number,
        ValueKind::Text,
        ValueKind::Date,
        ValueKind::Sequence,
        ValueKind::Mapping,
        ValueKind::Function,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Date => "date",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
            ValueKind::Function => "function",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueKindError {
    input: String,
}

impl ParseValueKindError {
    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseValueKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value kind '{}'", self.input)
    }
}

impl std::error::Error for ParseValueKindError {}

impl FromStr for ValueKind {
    type Err = ParseValueKindError;

    /// Accepts the canonical names plus the common aliases
    /// (`bool`, `string`, `array`, `object`, `map`, `list`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(kind) = ValueKind::ALL.into_iter().find(|k| k.as_str() == name) {
            return Ok(kind);
        }
        match name.as_str() {
            "bool" => Ok(ValueKind::Boolean),
            "string" => Ok(ValueKind::Text),
            "array" | "list" => Ok(ValueKind::Sequence),
            "object" | "map" => Ok(ValueKind::Mapping),
            _ => Err(ParseValueKindError {
                input: s.to_string(),
            }),
        }
    }
}
