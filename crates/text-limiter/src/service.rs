// crates/text-limiter/src/service.rs

//! TextLimiter: text-limiter クレートの統合ファサード。
//!
//! - 値の取得時: フィールド値を切り詰める (`filter_value`)
//! - フィールド描画時: カウンターバッジの表示情報を返す (`badge`)
//!
//! ホスト側のフォームフレームワークはこの構造体を保持し、
//! 自身の描画・値取得パイプラインから直接呼び出す。
//! グローバルなフック登録は行わない。

use tracing::{info, trace};

use crate::badge::{BadgeInfo, describe_with};
use crate::config::LimiterConfig;
use crate::errors::LimiterResult;
use crate::limiter::truncate;
use crate::models::FieldDescriptor;

/// text-limiter クレートの統合ファサード。
///
/// 構築後は不変のため `Clone + Send + Sync` で、複数スレッドから同時に呼び出せる。
#[derive(Debug, Clone, Default)]
pub struct TextLimiter {
  config: LimiterConfig,
}

impl TextLimiter {
  /// 設定を検証して構築する。
  ///
  /// # エラー
  /// - 設定が不正（fields.types が空、ラベルが空等）
  pub fn new(config: LimiterConfig) -> LimiterResult<Self> {
    // ConfigError は #[from] で LimiterError に自動変換
    config.validate()?;

    info!(field_types = ?config.field_types(), "Text limiter initialized");

    Ok(Self { config })
  }

  /// 現在の設定を返す。
  pub fn config(&self) -> &LimiterConfig {
    &self.config
  }

  /// フィールド種別が制限対象かどうか。
  pub fn supports(&self, field: &FieldDescriptor) -> bool {
    self.config.supports(&field.field_type)
  }

  /// 値取得時のフィルター。
  ///
  /// 対象外のフィールド種別、または制限なしの場合は値をそのまま返す。
  pub fn filter_value(&self, value: &str, field: &FieldDescriptor) -> String {
    if !self.supports(field) {
      trace!(field_type = %field.field_type, "Field type is not limited");
      return value.to_string();
    }

    truncate(value, &field.limit_config())
  }

  /// フィールド定義を JSON で受け取る版の [`filter_value`](Self::filter_value)。
  ///
  /// # エラー
  /// - フィールド定義 JSON の解析失敗
  pub fn filter_json_field(&self, value: &str, descriptor_json: &str) -> LimiterResult<String> {
    let field = FieldDescriptor::from_json_str(descriptor_json)?;
    Ok(self.filter_value(value, &field))
  }

  /// フィールド描画時のバッジ情報。
  ///
  /// 対象外のフィールド種別、または制限なしの場合は `None`。
  pub fn badge(&self, field: &FieldDescriptor) -> Option<BadgeInfo> {
    if !self.supports(field) {
      return None;
    }

    describe_with(&field.limit_config(), self.config.labels())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::badge::BadgeLabels;
  use crate::config::LimitUnit;
  use crate::errors::{ConfigError, LimiterError};

  #[test]
  fn new_rejects_invalid_config() {
    let mut config = LimiterConfig::default();
    config.fields.types.clear();

    let err = TextLimiter::new(config).unwrap_err();
    assert!(matches!(err, LimiterError::Config(ConfigError::EmptyFieldTypes)));
  }

  #[test]
  fn filter_value_truncates_supported_fields() {
    let limiter = TextLimiter::default();
    let field = FieldDescriptor::new("textarea").with_limit(2).with_limit_type("word");

    assert_eq!(limiter.filter_value("one two three", &field), "one two");
  }

  #[test]
  fn filter_value_ignores_unsupported_fields() {
    let limiter = TextLimiter::default();
    let field = FieldDescriptor::new("wysiwyg").with_limit(2);

    assert_eq!(limiter.filter_value("one two three", &field), "one two three");
    assert!(limiter.badge(&field).is_none());
  }

  #[test]
  fn filter_value_without_limit_is_identity() {
    let limiter = TextLimiter::default();
    let field = FieldDescriptor::new("text").with_limit("none");

    assert_eq!(limiter.filter_value("  spaced   out ", &field), "  spaced   out ");
    assert!(limiter.badge(&field).is_none());
  }

  #[test]
  fn configured_field_types_are_respected() {
    let mut config = LimiterConfig::default();
    config.fields.types = vec!["wysiwyg".to_string()];
    let limiter = TextLimiter::new(config).unwrap();

    let wysiwyg = FieldDescriptor::new("wysiwyg").with_limit(3);
    let text = FieldDescriptor::new("text").with_limit(3);

    assert_eq!(limiter.filter_value("abcdef", &wysiwyg), "abc");
    assert_eq!(limiter.filter_value("abcdef", &text), "abcdef");
  }

  #[test]
  fn badge_uses_configured_labels() {
    let config = LimiterConfig {
      labels: BadgeLabels::new("Zeichen", "Wörter"),
      ..LimiterConfig::default()
    };
    let limiter = TextLimiter::new(config).unwrap();
    let field = FieldDescriptor::new("text").with_limit(8).with_limit_type("word");

    let badge = limiter.badge(&field).unwrap();
    assert_eq!(badge.label, "Wörter");
    assert_eq!(badge.maximum, 8);
    assert_eq!(badge.unit, LimitUnit::Word);
  }

  #[test]
  fn filter_json_field_parses_descriptor() {
    let limiter = TextLimiter::default();

    let out = limiter
      .filter_json_field("hello world", r#"{ "type": "text", "limit": "5" }"#)
      .unwrap();
    assert_eq!(out, "hello");
  }

  #[test]
  fn filter_json_field_tolerates_malformed_limit_settings() {
    let limiter = TextLimiter::default();

    let cases = [
      (r#"{ "type": "text", "limit": 5, "limit_type": 1 }"#, "hello"),
      (r#"{ "type": "text", "limit": 5, "limit_type": false }"#, "hello"),
      (r#"{ "id": 42, "type": "text", "limit": 5 }"#, "hello"),
      (r#"{ "type": "text", "limit": 1e400 }"#, "hello world"),
      (r#"{ "type": "text", "limit": "1e400" }"#, "hello world"),
    ];

    for (descriptor, expected) in cases {
      let out = limiter.filter_json_field("hello world", descriptor);
      assert_eq!(out.ok().as_deref(), Some(expected), "descriptor={descriptor}");
    }
  }

  #[test]
  fn filter_json_field_reports_bad_descriptor() {
    let limiter = TextLimiter::default();

    let err = limiter.filter_json_field("hello", "not json").unwrap_err();
    assert!(matches!(err, LimiterError::FieldDescriptor { .. }));
  }

  #[test]
  fn limiter_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<TextLimiter>();
  }
}
