//! Counter badge metadata
//!
//! The badge is rendered by the host's own templating next to the input and is
//! kept up to date by a browser-side script. This module only decides whether a
//! badge exists and what it says; it never produces markup.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CHARACTER_LABEL, DEFAULT_WORD_LABEL, LimitConfig, LimitUnit};

/// Display metadata for a counter widget.
///
/// The live count (starting at 0) is owned by the UI layer and is not part of this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeInfo {
  /// Label shown before the counter, e.g. "Word Count"
  pub label: String,
  /// Maximum number of units
  pub maximum: usize,
  /// What the UI should count ("character" | "word")
  pub unit: LimitUnit,
}

/// Localisable badge labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeLabels {
  /// Label for character limits
  #[serde(default = "default_character_label")]
  pub character: String,
  /// Label for word limits
  #[serde(default = "default_word_label")]
  pub word: String,
}

fn default_character_label() -> String {
  DEFAULT_CHARACTER_LABEL.to_string()
}

fn default_word_label() -> String {
  DEFAULT_WORD_LABEL.to_string()
}

impl Default for BadgeLabels {
  fn default() -> Self {
    Self {
      character: default_character_label(),
      word: default_word_label(),
    }
  }
}

impl BadgeLabels {
  /// Builds a label set, e.g. from a translation catalogue.
  pub fn new(character: impl Into<String>, word: impl Into<String>) -> Self {
    Self {
      character: character.into(),
      word: word.into(),
    }
  }

  /// Returns the label for `unit`.
  pub fn label_for(&self, unit: LimitUnit) -> &str {
    match unit {
      LimitUnit::Character => &self.character,
      LimitUnit::Word => &self.word,
    }
  }
}

/// Describes the badge for `config` with the default English labels.
///
/// Returns `None` exactly when [`crate::limiter::truncate`] would leave values untouched.
///
/// # Examples
/// ```
/// use text_limiter::{LimitConfig, describe};
///
/// let badge = describe(&LimitConfig::words(3)).unwrap();
/// assert_eq!(badge.label, "Word Count");
/// assert_eq!(badge.maximum, 3);
///
/// assert!(describe(&LimitConfig::unlimited()).is_none());
/// ```
pub fn describe(config: &LimitConfig) -> Option<BadgeInfo> {
  describe_with(config, &BadgeLabels::default())
}

/// Same as [`describe`] with caller-supplied labels.
pub fn describe_with(config: &LimitConfig, labels: &BadgeLabels) -> Option<BadgeInfo> {
  let maximum = config.max()?;
  let unit = config.unit();

  Some(BadgeInfo {
    label: labels.label_for(unit).to_string(),
    maximum,
    unit,
  })
}
