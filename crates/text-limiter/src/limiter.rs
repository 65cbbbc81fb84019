//! Character / word truncation
//!
//! Pure functions over `&str`. Invalid or missing limits never fail: an
//! unlimited [`LimitConfig`] turns [`truncate`] into the identity.

use tracing::debug;

use crate::config::{LimitConfig, LimitUnit};

/// Truncates `value` to the limit described by `config`.
///
/// - unlimited config: `value` is returned unchanged
/// - `LimitUnit::Character`: the first `limit` Unicode scalar values
/// - `LimitUnit::Word`: the first `limit` whitespace-delimited tokens joined by a single space
///
/// In word mode the output is always re-joined, so runs of whitespace collapse to
/// one space and leading/trailing whitespace disappears even when nothing is cut.
///
/// # Examples
/// ```
/// use text_limiter::{LimitConfig, truncate};
///
/// assert_eq!(truncate("hello world", &LimitConfig::characters(5)), "hello");
/// assert_eq!(truncate("hello   world  foo", &LimitConfig::words(2)), "hello world");
/// assert_eq!(truncate("anything", &LimitConfig::characters(0)), "anything");
/// ```
pub fn truncate(value: &str, config: &LimitConfig) -> String {
  let Some(limit) = config.max() else {
    return value.to_string();
  };

  let truncated = match config.unit() {
    LimitUnit::Character => match value.char_indices().nth(limit) {
      // nth(limit) is the first char past the limit, so slicing keeps whole code points
      Some((cut, _)) => value[..cut].to_string(),
      None => value.to_string(),
    },
    LimitUnit::Word => tokens(value).take(limit).collect::<Vec<_>>().join(" "),
  };

  if exceeds(value, config) {
    debug!(
      unit = %config.unit(),
      limit,
      before = value.len(),
      after = truncated.len(),
      "Truncated field value"
    );
  }

  truncated
}

/// Whether `value` has more units than `config` allows, i.e. [`truncate`] drops something.
///
/// Always `false` for an unlimited config. Whitespace normalisation in word mode alone
/// does not count as exceeding.
pub fn exceeds(value: &str, config: &LimitConfig) -> bool {
  let Some(limit) = config.max() else {
    return false;
  };

  match config.unit() {
    LimitUnit::Character => value.chars().nth(limit).is_some(),
    LimitUnit::Word => tokens(value).nth(limit).is_some(),
  }
}

/// Counts the units of `value` the way [`truncate`] sees them.
///
/// Code points for `LimitUnit::Character`, whitespace tokens for `LimitUnit::Word`.
pub fn count(value: &str, unit: LimitUnit) -> usize {
  match unit {
    LimitUnit::Character => value.chars().count(),
    LimitUnit::Word => tokens(value).count(),
  }
}

/// Splits `value` on runs of Unicode whitespace, skipping empty tokens.
pub fn tokens(value: &str) -> impl Iterator<Item = &str> {
  value.split_whitespace()
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // ─── Character mode ───────────────────────────────────────────────────

  #[test]
  fn characters_cut_to_limit() {
    assert_eq!(truncate("hello world", &LimitConfig::characters(5)), "hello");
  }

  #[test]
  fn characters_shorter_than_limit_unchanged() {
    assert_eq!(truncate("hi", &LimitConfig::characters(10)), "hi");
  }

  #[test]
  fn characters_exact_limit_unchanged() {
    assert_eq!(truncate("hello", &LimitConfig::characters(5)), "hello");
  }

  #[test]
  fn characters_keep_multibyte_intact() {
    assert_eq!(truncate("東京タワー", &LimitConfig::characters(2)), "東京");
    assert_eq!(truncate("naïve café", &LimitConfig::characters(3)), "naï");
    assert_eq!(truncate("🦀🦀🦀", &LimitConfig::characters(1)), "🦀");
  }

  #[test]
  fn characters_keep_whitespace() {
    assert_eq!(truncate("  a  b", &LimitConfig::characters(4)), "  a ");
  }

  #[test]
  fn characters_empty_value() {
    assert_eq!(truncate("", &LimitConfig::characters(3)), "");
  }

  // ─── Word mode ────────────────────────────────────────────────────────

  #[test]
  fn words_cut_and_normalise_spacing() {
    assert_eq!(truncate("hello   world  foo", &LimitConfig::words(2)), "hello world");
  }

  #[test]
  fn words_all_whitespace_yields_empty() {
    assert_eq!(truncate("  ", &LimitConfig::words(5)), "");
  }

  #[test]
  fn words_under_limit_still_normalised() {
    assert_eq!(truncate("  one\t two\n", &LimitConfig::words(5)), "one two");
  }

  #[test]
  fn words_split_on_mixed_whitespace() {
    assert_eq!(truncate("a\tb\r\nc d", &LimitConfig::words(3)), "a b c");
  }

  #[test]
  fn words_keep_punctuation_attached() {
    assert_eq!(truncate("Hello, world! Bye.", &LimitConfig::words(2)), "Hello, world!");
  }

  #[test]
  fn words_split_on_unicode_whitespace() {
    // U+3000 IDEOGRAPHIC SPACE
    assert_eq!(truncate("東京\u{3000}大阪\u{3000}京都", &LimitConfig::words(2)), "東京 大阪");
  }

  // ─── No limit ─────────────────────────────────────────────────────────

  #[test]
  fn unlimited_is_identity() {
    let value = "  keep   everything  ";
    assert_eq!(truncate(value, &LimitConfig::unlimited()), value);
    assert_eq!(truncate(value, &LimitConfig::words(0)), value);
    assert_eq!(truncate(value, &LimitConfig::new(-1, LimitUnit::Word)), value);
  }

  #[test]
  fn zero_limit_is_identity() {
    assert_eq!(truncate("anything", &LimitConfig::characters(0)), "anything");
  }

  // ─── exceeds ─────────────────────────────────────────────────────────

  #[test]
  fn exceeds_only_when_units_are_dropped() {
    assert!(exceeds("hello world", &LimitConfig::characters(5)));
    assert!(!exceeds("hello", &LimitConfig::characters(5)));
    assert!(exceeds("one two three", &LimitConfig::words(2)));
    assert!(!exceeds("one two", &LimitConfig::words(2)));
  }

  #[test]
  fn exceeds_ignores_whitespace_normalisation() {
    let config = LimitConfig::words(5);

    // output is shorter than the input, but no token was removed
    assert_eq!(truncate("a  b", &config), "a b");
    assert!(!exceeds("a  b", &config));
    assert!(!exceeds("   ", &config));
  }

  #[test]
  fn exceeds_false_without_limit() {
    assert!(!exceeds("anything at all", &LimitConfig::unlimited()));
    assert!(!exceeds("anything at all", &LimitConfig::words(0)));
  }

  // ─── count / tokens ───────────────────────────────────────────────────

  #[test]
  fn count_characters_by_code_point() {
    assert_eq!(count("héllo", LimitUnit::Character), 5);
    assert_eq!(count("", LimitUnit::Character), 0);
  }

  #[test]
  fn count_words_ignores_extra_whitespace() {
    assert_eq!(count("  a  b   c ", LimitUnit::Word), 3);
    assert_eq!(count(" \n\t", LimitUnit::Word), 0);
  }

  #[test]
  fn tokens_preserve_order() {
    let collected: Vec<&str> = tokens(" x  y z ").collect();
    assert_eq!(collected, vec!["x", "y", "z"]);
  }
}
