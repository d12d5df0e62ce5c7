//! KeyValueStorage port - 永続ストアの抽象化
//!
//! 文字列キーの key-value スロット。タスク列全体が一つのキーの下に
//! JSON で保存されます。

use thiserror::Error;

/// StorageError は永続ストアの読み書きエラー
///
/// 呼び出し側（persist モジュール）はこれを必ず吸収する。
/// 書き込み失敗（quota 超過など）でアプリが落ちてはいけない。
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("{0}")]
    Other(String),
}

/// KeyValueStorage は文字列キーの永続スロット
///
/// # 契約
/// - `get` はキーが存在しなければ `Ok(None)`（エラーではない）
/// - `set` は上書き。失敗は StorageError として返す（呼び出し側で吸収）
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
