//! 作業時間テーブルの正規化
//!
//! ## 処理フロー
//! 1. 列名の前後空白を除去し、先頭列を `GroupID` にする
//! 2. 必須列の存在チェック（不足時は [`Error::Schema`]）
//! 3. 空の GroupID を直前の値で埋める（前方補完）
//! 4. 作業コードのない行を除外
//! 5. 文字列・工数（M/H）・備考の正規化
//! 6. 出力キーに揃えた [`WorkRecord`] を元の行順で返す

use crate::cell::CellValue;
use crate::columns::{ColumnMapping, GROUP_ID_LABEL};
use crate::error::{Error, Result};
use crate::record::WorkRecord;
use crate::table::RawTable;
use tracing::debug;

/// 備考で「なし」を表す記号
const REMARKS_NONE_MARK: &str = "/";

/// 正規化の統計情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationStats {
    /// 入力データ行数
    pub total_rows: usize,
    /// 作業コードなしで除外した行数
    pub dropped_rows: usize,
    /// GroupIDを前方補完した行数
    pub filled_group_ids: usize,
    /// 数値に変換できず 0.0 にした工数セル数
    pub coerced_man_hours: usize,
}

/// 正規化結果
#[derive(Debug, Clone)]
pub struct NormalizationResult {
    pub records: Vec<WorkRecord>,
    pub stats: NormalizationStats,
}

/// 列の位置
struct ColumnIndices {
    work_code: usize,
    work_name_cn: usize,
    work_name_ko: usize,
    man_hours: usize,
    remarks: usize,
}

/// 生テーブルを [`WorkRecord`] の列に変換する
#[derive(Debug, Clone, Default)]
pub struct TableNormalizer {
    mapping: ColumnMapping,
}

impl TableNormalizer {
    pub fn new(mapping: ColumnMapping) -> Self {
        Self { mapping }
    }

    /// テーブルを正規化してレコード列を返す
    pub fn normalize(&self, table: RawTable) -> Result<Vec<WorkRecord>> {
        Ok(self.normalize_with_stats(table)?.records)
    }

    /// 統計情報付きで正規化する
    pub fn normalize_with_stats(&self, mut table: RawTable) -> Result<NormalizationResult> {
        table.rename_labels(|_, label| label.trim().to_string());
        table.rename_labels(|index, label| {
            if index == 0 {
                GROUP_ID_LABEL.to_string()
            } else {
                label.to_string()
            }
        });

        let columns = self.resolve_columns(&table)?;

        let mut stats = NormalizationStats {
            total_rows: table.len(),
            ..Default::default()
        };

        let groups = forward_fill_groups(&table, &mut stats);
        let mut records = Vec::with_capacity(table.len());

        for (row, group) in table.rows().zip(groups) {
            let work_code = row.cell(columns.work_code);
            if work_code.is_missing() {
                stats.dropped_rows += 1;
                continue;
            }

            let man_hours_cell = row.cell(columns.man_hours);
            let man_hours = match man_hours_cell.parse_number() {
                Some(value) => value,
                None => {
                    if !matches!(man_hours_cell, CellValue::Empty) {
                        debug!("M/H を 0.0 に変換: {:?}", man_hours_cell);
                        stats.coerced_man_hours += 1;
                    }
                    0.0
                }
            };

            records.push(WorkRecord {
                group_id: group.and_then(CellValue::normalized_text),
                work_code: work_code.normalized_text(),
                work_name_cn: row.cell(columns.work_name_cn).normalized_text(),
                work_name_ko: row.cell(columns.work_name_ko).normalized_text(),
                man_hours,
                remarks: row
                    .cell(columns.remarks)
                    .normalized_text()
                    .filter(|remarks| remarks != REMARKS_NONE_MARK),
            });
        }

        debug!(
            "正規化完了: 入力{}行, 出力{}件, 除外{}行, GroupID補完{}行",
            stats.total_rows,
            records.len(),
            stats.dropped_rows,
            stats.filled_group_ids
        );

        Ok(NormalizationResult { records, stats })
    }

    /// 必須列の位置を解決する。不足があれば Schema エラー
    fn resolve_columns(&self, table: &RawTable) -> Result<ColumnIndices> {
        let missing: Vec<String> = self
            .mapping
            .required_labels()
            .iter()
            .filter(|label| table.column_index(label).is_none())
            .map(|label| label.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::Schema {
                missing,
                actual: table.labels().to_vec(),
            });
        }

        let index = |label: &str| table.column_index(label).unwrap_or_default();
        Ok(ColumnIndices {
            work_code: index(self.mapping.work_code.as_str()),
            work_name_cn: index(self.mapping.work_name_cn.as_str()),
            work_name_ko: index(self.mapping.work_name_ko.as_str()),
            man_hours: index(self.mapping.man_hours.as_str()),
            remarks: index(self.mapping.remarks.as_str()),
        })
    }
}

/// 先頭列（GroupID）を前方補完する
///
/// 最初の有効値より前の行は `None` のまま。
fn forward_fill_groups<'a>(
    table: &'a RawTable,
    stats: &mut NormalizationStats,
) -> Vec<Option<&'a CellValue>> {
    let mut last: Option<&CellValue> = None;

    table
        .rows()
        .map(|row| {
            let cell = row.cell(0);
            if cell.is_missing() {
                if last.is_some() {
                    stats.filled_group_ids += 1;
                }
                last
            } else {
                last = Some(cell);
                last
            }
        })
        .collect()
}
