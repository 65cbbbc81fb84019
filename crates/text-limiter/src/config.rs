// crates/text-limiter/src/config.rs

use std::num::NonZeroUsize;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::badge::BadgeLabels;
use crate::errors::ConfigError;

/// Field types that get limits applied when nothing else is configured.
pub const DEFAULT_FIELD_TYPES: [&str; 2] = ["text", "textarea"];

/// Default badge label for character limits.
pub const DEFAULT_CHARACTER_LABEL: &str = "Character Count";

/// Default badge label for word limits.
pub const DEFAULT_WORD_LABEL: &str = "Word Count";

/// Environment variable overriding `fields.types` (comma separated).
pub const ENV_FIELD_TYPES: &str = "TEXT_LIMITER_FIELD_TYPES";

/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "TEXT_LIMITER_LOG_LEVEL";

/// Counting granularity of a limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitUnit {
  /// One unit per Unicode scalar value
  #[default]
  Character,
  /// One unit per whitespace-delimited token
  Word,
}

impl LimitUnit {
  /// Maps a host framework `limit_type` value to a unit.
  ///
  /// Only `"word"` selects word mode. Any other string, including typos and the
  /// empty string, falls back to character mode.
  pub fn from_limit_type(limit_type: &str) -> Self {
    if limit_type == "word" {
      LimitUnit::Word
    } else {
      LimitUnit::Character
    }
  }

  /// Returns the `limit_type` spelling of this unit.
  ///
  /// # Examples
  /// - `LimitUnit::Character` → `"character"`
  /// - `LimitUnit::Word` → `"word"`
  pub fn as_str(&self) -> &'static str {
    match self {
      LimitUnit::Character => "character",
      LimitUnit::Word => "word",
    }
  }
}

impl std::fmt::Display for LimitUnit {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Limit applied to a single field.
///
/// `limit == None` is the "no limit" sentinel. Both [`crate::limiter::truncate`]
/// and [`crate::badge::describe`] decide through [`LimitConfig::max`], so a field
/// gets a badge exactly when its value can be truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LimitConfig {
  limit: Option<NonZeroUsize>,
  unit: LimitUnit,
}

impl LimitConfig {
  /// Builds a config from a signed limit. Zero and negative limits mean "no limit".
  pub fn new(limit: i64, unit: LimitUnit) -> Self {
    let limit = if limit <= 0 {
      None
    } else {
      NonZeroUsize::new(usize::try_from(limit).unwrap_or(usize::MAX))
    };
    Self { limit, unit }
  }

  /// Builds a config from an already validated limit.
  pub fn from_parts(limit: Option<NonZeroUsize>, unit: LimitUnit) -> Self {
    Self { limit, unit }
  }

  /// Config that never truncates.
  pub fn unlimited() -> Self {
    Self::default()
  }

  /// Character limit of `limit` (0 means no limit).
  pub fn characters(limit: usize) -> Self {
    Self::from_parts(NonZeroUsize::new(limit), LimitUnit::Character)
  }

  /// Word limit of `limit` (0 means no limit).
  pub fn words(limit: usize) -> Self {
    Self::from_parts(NonZeroUsize::new(limit), LimitUnit::Word)
  }

  /// Maximum number of units, or `None` when unlimited.
  pub fn max(&self) -> Option<usize> {
    self.limit.map(NonZeroUsize::get)
  }

  /// Whether this config restricts anything.
  pub fn has_limit(&self) -> bool {
    self.limit.is_some()
  }

  /// Counting unit.
  pub fn unit(&self) -> LimitUnit {
    self.unit
  }
}

/// Top-level configuration for the [`crate::service::TextLimiter`] facade.
///
/// Every section may be omitted:
///
/// ```json
/// {
///   "fields":  { "types": ["text", "textarea"] },
///   "labels":  { "character": "Character Count", "word": "Word Count" },
///   "logging": { "level": "info" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LimiterConfig {
  /// [fields] section
  #[serde(default)]
  pub fields: FieldsConfig,
  /// [labels] section
  #[serde(default)]
  pub labels: BadgeLabels,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [fields] section configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldsConfig {
  /// Field types whose values are limited (e.g., ["text", "textarea"])
  #[serde(default = "default_field_types")]
  pub types: Vec<String>,
}

impl Default for FieldsConfig {
  fn default() -> Self {
    Self {
      types: default_field_types(),
    }
  }
}

/// Default field type list
fn default_field_types() -> Vec<String> {
  DEFAULT_FIELD_TYPES.iter().map(|t| t.to_string()).collect()
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
///
/// Deserialized through [`FromStr`], so config files accept the same spellings
/// as `TEXT_LIMITER_LOG_LEVEL` (case-insensitive, surrounding whitespace ignored).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Returns the directive string understood by `EnvFilter`.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl FromStr for LogLevel {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(ConfigError::InvalidLogLevel {
        value: s.to_string(),
      }),
    }
  }
}

impl TryFrom<String> for LogLevel {
  type Error = ConfigError;

  fn try_from(value: String) -> Result<Self, <Self as TryFrom<String>>::Error> {
    value.parse()
  }
}

// ===== Loading =====

impl LimiterConfig {
  /// Parses and validates a JSON document.
  ///
  /// # Errors
  /// `ConfigError::Parse` for malformed JSON, otherwise whatever [`validate`](Self::validate) reports.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    let config: LimiterConfig =
      serde_json::from_str(json).map_err(|e| ConfigError::Parse { source: Arc::new(e) })?;
    config.validate()?;
    Ok(config)
  }

  /// Reads, parses and validates a JSON file.
  ///
  /// # Errors
  /// `ConfigError::Read` if the file cannot be read, then as [`from_json_str`](Self::from_json_str).
  pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_json_str(&json)
  }

  /// Default configuration overridden by environment variables.
  ///
  /// - `TEXT_LIMITER_FIELD_TYPES`: comma separated field types
  /// - `TEXT_LIMITER_LOG_LEVEL`: log level
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Same as [`from_env`](Self::from_env) with an injectable variable source.
  fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = LimiterConfig::default();

    if let Some(types) = lookup(ENV_FIELD_TYPES) {
      config.fields.types = types.split(',').map(|t| t.trim().to_string()).collect();
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL) {
      config.logging.level = level.parse()?;
    }

    config.validate()?;
    Ok(config)
  }
}

// ===== Accessor Methods =====

impl LimiterConfig {
  /// Returns the list of field types that get limits applied.
  pub fn field_types(&self) -> &[String] {
    &self.fields.types
  }

  /// Whether values of `field_type` are limited.
  pub fn supports(&self, field_type: &str) -> bool {
    self.fields.types.iter().any(|t| t == field_type)
  }

  /// Returns the badge labels.
  pub fn labels(&self) -> &BadgeLabels {
    &self.labels
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `fields.types` is not empty
  /// - no entry of `fields.types` is blank
  /// - `labels.character` and `labels.word` are not blank
  ///
  /// # Errors
  /// Returns the first failing check as `ConfigError`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.fields.types.is_empty() {
      return Err(ConfigError::EmptyFieldTypes);
    }

    if let Some(index) = self.fields.types.iter().position(|t| t.trim().is_empty()) {
      return Err(ConfigError::BlankFieldType { index });
    }

    for unit in [LimitUnit::Character, LimitUnit::Word] {
      if self.labels.label_for(unit).trim().is_empty() {
        return Err(ConfigError::BlankLabel { unit });
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
