//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 必須列が見つからない（処理全体を中断する）
    #[error("必須列がありません: {missing:?}. 実際の列名: {actual:?}")]
    Schema {
        missing: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
