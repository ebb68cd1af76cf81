//! ワークブック読み込み
//!
//! calamine でシートを開き、指定列範囲のセルをグリッドとして取り出して
//! ヘッダー行付きの [`RawTable`] にする。

mod range;

pub use range::ColumnRange;

use crate::error::{Result, WageError};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::debug;
use wage_json_common::{CellValue, RawTable};

/// シートのレイアウト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// ヘッダー行（0始まり、シート上の絶対位置）
    pub header_row: usize,
    /// 読み込む列範囲
    pub columns: ColumnRange,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            header_row: 3,
            columns: ColumnRange::default(),
        }
    }
}

/// シート名一覧を取得
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    ensure_exists(path)?;
    let workbook = open_workbook_auto(path)?;
    Ok(workbook.sheet_names())
}

/// シートを読み込んでテーブルにする
pub fn read_sheet(path: &Path, sheet: &str, layout: &SheetLayout) -> Result<RawTable> {
    ensure_exists(path)?;

    let mut workbook = open_workbook_auto(path)?;
    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(WageError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook.worksheet_range(sheet)?;
    let grid = sheet_grid(&range, layout.columns);
    debug!(
        "シート読み込み: {} ({}行, 列範囲 {})",
        sheet,
        grid.len(),
        layout.columns
    );

    Ok(RawTable::from_grid(grid, layout.header_row))
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(WageError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// シート先頭行から最終行までを列範囲で切り出す
///
/// 行・列はシート上の絶対位置で扱う（使用範囲の開始位置に依存しない）。
fn sheet_grid(range: &Range<Data>, columns: ColumnRange) -> Vec<Vec<CellValue>> {
    let Some((last_row, last_col)) = range.end() else {
        return Vec::new();
    };

    if last_col < columns.first {
        return vec![Vec::new(); last_row as usize + 1];
    }
    let last_col = last_col.min(columns.last);

    (0..=last_row)
        .map(|row| {
            (columns.first..=last_col)
                .map(|col| range.get_value((row, col)).map(to_cell).unwrap_or_default())
                .collect()
        })
        .collect()
}

/// calamine のセル値を変換
fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(b) => CellValue::text(if *b { "True" } else { "False" }),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_to_cell() {
        assert_eq!(to_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(to_cell(&Data::String("작업".into())), CellValue::text("작업"));
        assert_eq!(to_cell(&Data::Float(1.5)), CellValue::Number(1.5));
        assert_eq!(to_cell(&Data::Int(7)), CellValue::Number(7.0));
        assert_eq!(to_cell(&Data::Bool(true)), CellValue::text("True"));
        assert_eq!(to_cell(&Data::Error(CellErrorType::Div0)), CellValue::text("#DIV/0!"));
    }

    #[test]
    fn test_sheet_grid_absolute_positions() {
        // 使用範囲が (2, 1) から始まるシート
        let mut range: Range<Data> = Range::new((2, 1), (4, 3));
        range.set_value((2, 1), Data::String("title".into()));
        range.set_value((3, 1), Data::String("h1".into()));
        range.set_value((4, 3), Data::Float(2.0));

        let grid = sheet_grid(&range, ColumnRange::parse("A:C").unwrap());
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|row| row.len() == 3));
        assert_eq!(grid[3][1], CellValue::text("h1"));
        assert_eq!(grid[4][0], CellValue::Empty);
        assert_eq!(grid[0][1], CellValue::Empty);

        let wide = sheet_grid(&range, ColumnRange::default());
        assert_eq!(wide[4][3], CellValue::Number(2.0));
        assert_eq!(wide[4].len(), 4);
    }

    #[test]
    fn test_sheet_grid_range_outside_sheet() {
        let mut range: Range<Data> = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("x".into()));

        let grid = sheet_grid(&range, ColumnRange::parse("D:E").unwrap());
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_sheet_grid_empty_sheet() {
        let range: Range<Data> = Range::empty();
        assert!(sheet_grid(&range, ColumnRange::default()).is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_sheet(
            Path::new("/nonexistent/wage/12345.xlsx"),
            "Sheet1",
            &SheetLayout::default(),
        );
        assert!(matches!(result, Err(WageError::FileNotFound(_))));
    }
}
