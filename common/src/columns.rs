//! 列マッピング
//!
//! シート上の列名（韓国語）と出力キーの対応を管理する。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 先頭列に付ける列名
pub const GROUP_ID_LABEL: &str = "GroupID";

/// 出力キー（この順序で出力する）
pub const OUTPUT_KEYS: [&str; 6] = [
    "group_id",
    "work_code",
    "work_name_cn",
    "work_name_ko",
    "man_hours",
    "remarks",
];

/// 必須列のシート上の列名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    /// 작업코드
    pub work_code: String,
    /// 작업명(중)
    pub work_name_cn: String,
    /// 작업명(한)
    pub work_name_ko: String,
    /// M/H
    pub man_hours: String,
    /// 비고
    pub remarks: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            work_code: "작업코드".into(),
            work_name_cn: "작업명(중)".into(),
            work_name_ko: "작업명(한)".into(),
            man_hours: "M/H".into(),
            remarks: "비고".into(),
        }
    }
}

impl ColumnMapping {
    /// 必須列名（チェック順）
    pub fn required_labels(&self) -> [&str; 5] {
        [
            self.work_code.as_str(),
            self.work_name_cn.as_str(),
            self.work_name_ko.as_str(),
            self.man_hours.as_str(),
            self.remarks.as_str(),
        ]
    }

    /// 列名の妥当性チェック
    ///
    /// 空の列名や重複があると列を特定できないためエラーにする。
    pub fn validate(&self) -> Result<()> {
        let labels = self.required_labels();

        for label in labels {
            if label.trim().is_empty() {
                return Err(Error::Config("列名が空です".into()));
            }
            if label.trim() != label {
                return Err(Error::Config(format!(
                    "列名の前後に空白があります: {:?}",
                    label
                )));
            }
        }

        for (i, a) in labels.iter().enumerate() {
            if labels[i + 1..].contains(a) {
                return Err(Error::Config(format!("列名が重複しています: {}", a)));
            }
        }

        Ok(())
    }
}
