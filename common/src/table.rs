//! 取り込み済みテーブル
//!
//! セルのグリッドからヘッダー行を取り出して列名を決め、
//! それ以降の行をデータ行として保持する。

use crate::cell::CellValue;
use std::collections::{HashMap, HashSet};

/// 列名付きの生テーブル
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    labels: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// 1行分のビュー（列名 → セル値）
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    labels: &'a [String],
    cells: &'a [CellValue],
}

impl RawTable {
    pub fn new(labels: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { labels, rows }
    }

    /// グリッドから構築する
    ///
    /// `header_row` 行目（0始まり）を列名とし、それより後の行をデータ行とする。
    /// ヘッダー行が存在しない場合は空のテーブルを返す。
    pub fn from_grid(mut grid: Vec<Vec<CellValue>>, header_row: usize) -> Self {
        if grid.len() <= header_row {
            return Self::default();
        }

        let rows = grid.split_off(header_row + 1);
        let header = grid.swap_remove(header_row);

        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        Self {
            labels: header_labels(&header, width),
            rows,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.rows.iter().map(|cells| RawRow {
            labels: &self.labels,
            cells,
        })
    }

    /// 列名を書き換える
    pub fn rename_labels<F>(&mut self, mut rename: F)
    where
        F: FnMut(usize, &str) -> String,
    {
        for (index, label) in self.labels.iter_mut().enumerate() {
            *label = rename(index, label);
        }
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

impl<'a> RawRow<'a> {
    /// 列位置でセルを取得（行が短い場合は空セル）
    pub fn cell(&self, index: usize) -> &'a CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.cells.get(index).unwrap_or(EMPTY)
    }

    /// 列名でセルを取得
    pub fn get(&self, label: &str) -> Option<&'a CellValue> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|index| self.cell(index))
    }
}

/// ヘッダーセルから列名を決める
///
/// - 空セルは `Unnamed: {位置}`
/// - 重複した列名は2つ目以降に `.1`, `.2` … を付ける
pub fn header_labels(header: &[CellValue], width: usize) -> Vec<String> {
    let raw: Vec<String> = (0..width)
        .map(|index| match header.get(index) {
            Some(cell) if !matches!(cell, CellValue::Empty) => cell.to_string(),
            _ => format!("Unnamed: {}", index),
        })
        .collect();

    let mut used: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut labels = Vec::with_capacity(raw.len());

    for label in raw {
        let mut candidate = label.clone();
        if used.contains(&candidate) {
            let count = counts.entry(label.clone()).or_insert(0);
            loop {
                *count += 1;
                candidate = format!("{}.{}", label, count);
                if !used.contains(&candidate) {
                    break;
                }
            }
        }
        used.insert(candidate.clone());
        labels.push(candidate);
    }

    labels
}
