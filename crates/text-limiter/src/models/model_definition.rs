//! Data Model Definition
use std::num::NonZeroUsize;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::config::{LimitConfig, LimitUnit};
use crate::errors::{LimiterError, LimiterResult};

/// Field type assumed when the descriptor has no `type` key.
pub const DEFAULT_FIELD_TYPE: &str = "text";

/// Field definition handed over by the host form framework.
///
/// Only the keys relevant to limiting are modelled; unknown keys are ignored.
///
/// ```json
/// { "id": "summary", "type": "textarea", "limit": 50, "limit_type": "word" }
/// ```
///
/// `limit` is kept as raw JSON because hosts pass numbers, numeric strings
/// or garbage; [`limit_config`](Self::limit_config) normalises it.
/// `id`, `type` and `limit_type` of the wrong JSON type never fail the descriptor:
/// numbers are read as their decimal text, anything else as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
  /// Field ID
  #[serde(default, deserialize_with = "lenient_string")]
  pub id: Option<String>,

  /// Field type ("text", "textarea", ...); empty when the host sent a non-string
  #[serde(rename = "type", default = "default_field_type", deserialize_with = "lenient_field_type")]
  pub field_type: String,

  /// Raw limit value
  #[serde(default)]
  pub limit: Option<JsonValue>,

  /// "character" | "word"; anything else means "character"
  #[serde(default, deserialize_with = "lenient_string")]
  pub limit_type: Option<String>,
}

fn default_field_type() -> String {
  DEFAULT_FIELD_TYPE.to_string()
}

/// Reads strings as is and numbers as their text; every other JSON type is `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<JsonValue>::deserialize(deserializer)?;
  Ok(match raw {
    Some(JsonValue::String(s)) => Some(s),
    Some(JsonValue::Number(n)) => Some(n.to_string()),
    _ => None,
  })
}

/// A present but unusable `type` matches no configured field type.
fn lenient_field_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// Implementation block for FieldDescriptor
impl FieldDescriptor {
  /// Constructor for FieldDescriptor without limit
  pub fn new(field_type: impl Into<String>) -> Self {
    Self {
      id: None,
      field_type: field_type.into(),
      limit: None,
      limit_type: None,
    }
  }

  /// Builder that sets the field ID
  #[must_use]
  pub fn with_id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  /// Builder that sets the raw limit
  #[must_use]
  pub fn with_limit(mut self, limit: impl Into<JsonValue>) -> Self {
    self.limit = Some(limit.into());
    self
  }

  /// Builder that sets the limit type
  #[must_use]
  pub fn with_limit_type(mut self, limit_type: impl Into<String>) -> Self {
    self.limit_type = Some(limit_type.into());
    self
  }

  /// Deserializes a descriptor from JSON.
  ///
  /// # Errors
  /// `LimiterError::FieldDescriptor` if the JSON is malformed or not an object.
  pub fn from_json_str(json: &str) -> LimiterResult<Self> {
    serde_json::from_str(json).map_err(|e| LimiterError::FieldDescriptor { source: Arc::new(e) })
  }

  /// Counting unit selected by `limit_type`.
  pub fn unit(&self) -> LimitUnit {
    self.limit_type.as_deref().map(LimitUnit::from_limit_type).unwrap_or_default()
  }

  /// Normalised limit of this field.
  ///
  /// Missing, non-numeric, zero and negative limits all yield an unlimited config.
  pub fn limit_config(&self) -> LimitConfig {
    let limit = self.limit.as_ref().and_then(parse_limit);
    LimitConfig::from_parts(limit, self.unit())
  }
}

/// Interprets a raw JSON limit.
///
/// - integers: used as is when positive
/// - floats: truncated toward zero
/// - strings: trimmed, then parsed as integer or float
/// - anything else: no limit
pub fn parse_limit(raw: &JsonValue) -> Option<NonZeroUsize> {
  match raw {
    JsonValue::Number(n) => {
      if let Some(v) = n.as_u64() {
        positive(v)
      } else if n.as_i64().is_some() {
        // negative integer
        None
      } else {
        n.as_f64().and_then(from_float)
      }
    }
    JsonValue::String(s) => parse_numeric_str(s.trim()),
    _ => None,
  }
}

fn parse_numeric_str(s: &str) -> Option<NonZeroUsize> {
  if let Ok(v) = s.parse::<u64>() {
    return positive(v);
  }
  if s.parse::<i64>().is_ok() {
    return None;
  }
  s.parse::<f64>().ok().and_then(from_float)
}

fn from_float(v: f64) -> Option<NonZeroUsize> {
  if !v.is_finite() || v < 1.0 {
    return None;
  }
  // `as` saturates at u64::MAX
  positive(v.trunc() as u64)
}

fn positive(v: u64) -> Option<NonZeroUsize> {
  NonZeroUsize::new(usize::try_from(v).unwrap_or(usize::MAX))
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
