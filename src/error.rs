use thiserror::Error;

#[derive(Error, Debug)]
pub enum WageError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("シートが見つかりません: {sheet}. 存在するシート: {available:?}")]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    #[error("Excel読み込みエラー: {0}")]
    Workbook(String),

    #[error("列範囲が不正です: {0} (例: A:P)")]
    InvalidColumnRange(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] wage_json_common::Error),
}

impl From<calamine::Error> for WageError {
    fn from(err: calamine::Error) -> Self {
        WageError::Workbook(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WageError>;
