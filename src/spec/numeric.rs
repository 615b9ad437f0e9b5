//! Numeric field values as authored in project.json.
//!
//! Bounds and steps are usually JSON numbers, but steps are sometimes written
//! as strings ("0.05"). Both are kept as authored so a range echoes exactly
//! what the file says.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(Number),
    Text(String),
}

impl Numeric {
    pub fn zero() -> Self {
        Self::from(0_i64)
    }
}

/// Literal text of the value. JSON numbers render as their shortest
/// round-trip form, so 0.1 reads back as "0.1".
impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Numeric {
    fn from(v: i64) -> Self {
        Self::Number(Number::from(v))
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        match Number::from_f64(v) {
            Some(n) => Self::Number(n),
            None => Self::Text(v.to_string()),
        }
    }
}

impl From<&str> for Numeric {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Numeric {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
