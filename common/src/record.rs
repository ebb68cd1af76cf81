//! 出力レコードの型定義

use serde::{Deserialize, Serialize};

/// 作業コード1件分の正規化済みレコード
///
/// JSON出力時のキー順はフィールドの宣言順
/// （group_id, work_code, work_name_cn, work_name_ko, man_hours, remarks）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub group_id: Option<String>,
    pub work_code: Option<String>,
    pub work_name_cn: Option<String>,
    pub work_name_ko: Option<String>,
    #[serde(default)]
    pub man_hours: f64,
    pub remarks: Option<String>,
}
