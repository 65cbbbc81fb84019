//! text-limiter 文字数・単語数制限ライブラリー
//!
//! フォームの text / textarea フィールドに文字数または単語数の上限を設け、
//! 値の切り詰めとカウンター表示用メタデータの生成を行う

/// バッジモジュール - カウンターウィジェット用の表示メタデータ (BadgeInfo) を生成
pub mod badge;

/// 設定モジュール - LimitConfig, LimitUnit, LimiterConfig 等の設定構造体を定義
pub mod config;

/// エラーモジュール - LimiterError, LimiterResult 等のエラー型を定義
pub mod errors;

/// 切り詰めモジュール - 文字単位・単語単位の切り詰め処理
pub mod limiter;

/// ロギングモジュール - tracing-subscriber の初期化
pub mod logging;

/// データモデルモジュール - ホスト側のフィールド定義 (FieldDescriptor) を定義
pub mod models;

/// サービスモジュール - TextLimiter 等の上位レベルAPIを提供
pub mod service;

/// 再エクスポート
pub use badge::{BadgeInfo, BadgeLabels, describe, describe_with};
pub use config::{LimitConfig, LimitUnit, LimiterConfig};
pub use errors::{ConfigError, LimiterError, LimiterResult};
pub use limiter::{count, exceeds, truncate};
pub use models::FieldDescriptor;
pub use service::TextLimiter;
