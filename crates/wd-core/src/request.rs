use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A wire value: JSON number, or a string that may hold one. Models
/// emitting `"value": "0.5"` instead of `"value": 0.5` are common
/// enough that both shapes are first-class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(f64),
    Text(String),
}

impl NumberLike {
    /// Numeric reading, if there is one. Strings are trimmed first.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumberLike::Number(v) => Some(*v),
            NumberLike::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for NumberLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberLike::Number(v) => write!(f, "{v}"),
            NumberLike::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for NumberLike {
    fn from(value: f64) -> Self {
        NumberLike::Number(value)
    }
}

impl From<&str> for NumberLike {
    fn from(value: &str) -> Self {
        NumberLike::Text(value.to_owned())
    }
}

/// How the supplied value combines with the token's current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    #[default]
    Set,
    Add,
    Subtract,
}

impl UpdateMode {
    /// Lenient wire reading: `sub` is the historical spelling of
    /// `subtract`, and anything unrecognized falls back to `set`.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "add" => UpdateMode::Add,
            "sub" | "subtract" => UpdateMode::Subtract,
            _ => UpdateMode::Set,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateMode::Set => "set",
            UpdateMode::Add => "add",
            UpdateMode::Subtract => "subtract",
        }
    }
}

fn lenient_mode<'de, D>(deserializer: D) -> Result<UpdateMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(UpdateMode::from_wire).unwrap_or_default())
}

/// One structured edit request, in the translator's wire shape.
///
/// Every field is optional on the wire: a missing name resolves (and
/// then skips) as the empty string, a missing or unknown mode reads as
/// `set`, and a missing value surfaces later as a per-request error
/// rather than a rejected batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub parameter_name: String,
    #[serde(default, deserialize_with = "lenient_mode")]
    pub mode: UpdateMode,
    /// Older translator replies used the `new_value` key.
    #[serde(default, alias = "new_value")]
    pub value: Option<NumberLike>,
}

impl UpdateRequest {
    pub fn new(name: impl Into<String>, mode: UpdateMode, value: impl Into<NumberLike>) -> Self {
        Self {
            parameter_name: name.into(),
            mode,
            value: Some(value.into()),
        }
    }

    /// Shorthand for the most common request shape.
    pub fn set(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, UpdateMode::Set, value)
    }
}
