//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::config::LimitUnit;

/// 設定（LimiterConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// fields.types が空
  #[error("fields.types に少なくとも1つのフィールド種別を指定してください")]
  EmptyFieldTypes,

  /// fields.types に空文字（空白のみを含む）の要素がある
  #[error("fields.types に空のフィールド種別が含まれています: index={index}")]
  BlankFieldType {
    /// 問題のある要素の位置
    index: usize,
  },

  /// labels のいずれかが空
  #[error("labels.{unit} は空にできません")]
  BlankLabel {
    /// 空だったラベルの単位
    unit: LimitUnit,
  },

  /// ログレベルの文字列が不正
  #[error("ログレベルが不正です: {value} (trace, debug, info, warn, error のいずれか)")]
  InvalidLogLevel {
    /// 指定された値
    value: String,
  },

  /// 設定ファイルの読み込みに失敗
  #[error("設定ファイルの読み込みに失敗しました: path={path:?}, error={source}")]
  Read {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// 設定 JSON の解析に失敗
  #[error("設定 JSON の解析に失敗しました: {source}")]
  Parse {
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `LimiterResult<T>` = `Result<T, LimiterError>` として使用する
///
/// 切り詰め処理 (`truncate`) とバッジ生成 (`describe`) はエラーを返さない。
/// 不正な制限設定は常に「制限なし」として扱われる。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LimiterError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// フィールド定義 JSON のデシリアライズ失敗
  #[error("フィールド定義の解析に失敗しました: {source}")]
  FieldDescriptor {
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// text-limiter クレートの標準 Result 型エイリアス
pub type LimiterResult<T> = Result<T, LimiterError>;
