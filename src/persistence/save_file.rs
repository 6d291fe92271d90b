//! The on-disk save document

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PersistenceError;

/// Key holding the best score
pub const HIGH_SCORE_KEY: &str = "high_score";

/// Contents of the save file.
///
/// Only `high_score` is understood; anything else is dropped on rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaveFile {
    pub high_score: u32,
}

impl SaveFile {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }

    /// Parse a save document.
    ///
    /// A missing `high_score` reads as 0. Negative numbers clamp to 0 and
    /// fractional numbers truncate toward zero. Only JSON numbers count:
    /// numeric strings (`"5"`) and booleans are rejected as `InvalidField`
    /// rather than coerced.
    pub fn from_json(text: &str) -> Result<Self, PersistenceError> {
        let raw: Value = serde_json::from_str(text).map_err(PersistenceError::Malformed)?;
        let object = raw.as_object().ok_or(PersistenceError::NotAnObject)?;

        let high_score = match object.get(HIGH_SCORE_KEY) {
            None => 0,
            Some(value) => coerce_score(value).ok_or(PersistenceError::InvalidField {
                field: HIGH_SCORE_KEY,
            })?,
        };

        Ok(Self { high_score })
    }

    /// Pretty-printed JSON (2-space indent, sorted keys) with a trailing newline
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        let mut text = serde_json::to_string_pretty(self).map_err(PersistenceError::Encode)?;
        text.push('\n');
        Ok(text)
    }
}

fn coerce_score(value: &Value) -> Option<u32> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(n) = n.as_u64() {
        return Some(n.min(u32::MAX as u64) as u32);
    }
    if n.as_i64().is_some() {
        return Some(0);
    }
    n.as_f64().map(|f| f.trunc().clamp(0.0, u32::MAX as f64) as u32)
}
