use crate::error::{Result, WageError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wage_json_common::ColumnMapping;

/// 変換設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ヘッダー行（0始まり、シート上の絶対位置）
    pub header_row: usize,
    /// 読み込む列範囲
    pub column_range: String,
    /// JSONのインデント幅
    pub indent: usize,
    /// 必須列の列名
    pub columns: ColumnMapping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_row: 3, // Excelの4行目
            column_range: "A:P".into(),
            indent: 2,
            columns: ColumnMapping::default(),
        }
    }
}

impl Config {
    /// 既定パスから読み込み（ファイルがなければデフォルト）
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_json::from_str::<Config>(&content)?
        } else {
            tracing::debug!("設定ファイルなし、デフォルトを使用: {}", config_path.display());
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WageError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("wage-json").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        self.columns.validate()?;
        crate::reader::ColumnRange::parse(&self.column_range)?;
        Ok(())
    }
}
