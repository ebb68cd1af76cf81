//! Excel → JSON 変換の処理ステップ（読み込み・正規化 → 保存）

use crate::error::Result;
use crate::export;
use crate::reader::{self, SheetLayout};
use std::path::PathBuf;
use tracing::info;
use wage_json_common::{ColumnMapping, NormalizationStats, TableNormalizer, WorkRecord};

/// 変換の入力
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub excel: PathBuf,
    pub sheet: String,
    pub output: PathBuf,
    pub layout: SheetLayout,
    pub columns: ColumnMapping,
    pub indent: usize,
}

/// 変換結果
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub records: Vec<WorkRecord>,
    pub stats: NormalizationStats,
}

/// シートを読み込んで正規化する（保存はしない）
pub fn load_records(options: &ConvertOptions) -> Result<ConvertReport> {
    let table = reader::read_sheet(&options.excel, &options.sheet, &options.layout)?;
    info!(
        "{}: {}列 / {}行",
        options.sheet,
        table.labels().len(),
        table.len()
    );

    let normalizer = TableNormalizer::new(options.columns.clone());
    let result = normalizer.normalize_with_stats(table)?;

    Ok(ConvertReport {
        records: result.records,
        stats: result.stats,
    })
}

/// 正規化済みレコードを出力先に JSON で保存する
pub fn save_records(options: &ConvertOptions, report: &ConvertReport) -> Result<()> {
    export::write_records(&options.output, &report.records, options.indent)?;
    info!(
        "保存: {} ({}件)",
        options.output.display(),
        report.records.len()
    );
    Ok(())
}
