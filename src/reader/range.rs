//! 列範囲（`A:P` 形式）の解析

use crate::error::{Result, WageError};
use regex::Regex;

/// 読み込む列の範囲（0始まり、両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    pub first: u32,
    pub last: u32,
}

impl ColumnRange {
    /// `A:P` / `a:p` / `C`（1列のみ）を解析
    pub fn parse(text: &str) -> Result<Self> {
        lazy_static::lazy_static! {
            static ref RANGE_RE: Regex =
                Regex::new(r"^\s*([A-Za-z]{1,3})\s*(?::\s*([A-Za-z]{1,3})\s*)?$").unwrap();
        }

        let caps = RANGE_RE
            .captures(text)
            .ok_or_else(|| WageError::InvalidColumnRange(text.to_string()))?;

        let first = column_index(&caps[1]);
        let last = caps.get(2).map(|m| column_index(m.as_str())).unwrap_or(first);

        if first > last {
            return Err(WageError::InvalidColumnRange(text.to_string()));
        }

        Ok(Self { first, last })
    }

    pub fn width(&self) -> u32 {
        self.last - self.first + 1
    }
}

impl Default for ColumnRange {
    fn default() -> Self {
        // A:P
        Self { first: 0, last: 15 }
    }
}

impl std::fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", column_letters(self.first), column_letters(self.last))
    }
}

/// 列記号 → 0始まりの列番号（A=0, Z=25, AA=26）
fn column_index(letters: &str) -> u32 {
    letters
        .chars()
        .map(|c| c.to_ascii_uppercase() as u32 - 'A' as u32 + 1)
        .fold(0, |acc, n| acc * 26 + n)
        - 1
}

/// 0始まりの列番号 → 列記号
fn column_letters(mut index: u32) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_range() {
        let range = ColumnRange::parse("A:P").unwrap();
        assert_eq!(range, ColumnRange { first: 0, last: 15 });
        assert_eq!(range, ColumnRange::default());
        assert_eq!(range.width(), 16);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(ColumnRange::parse(" b : f ").unwrap(), ColumnRange { first: 1, last: 5 });
        assert_eq!(ColumnRange::parse("C").unwrap(), ColumnRange { first: 2, last: 2 });
        assert_eq!(ColumnRange::parse("Z:AB").unwrap(), ColumnRange { first: 25, last: 27 });
    }

    #[test]
    fn test_parse_invalid() {
        for text in ["", "P:A", "A-P", "1:3", "A:P:Q", "ABCD"] {
            let result = ColumnRange::parse(text);
            assert!(
                matches!(result, Err(WageError::InvalidColumnRange(_))),
                "受理されてしまった: {:?}",
                text
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ColumnRange::default().to_string(), "A:P");
        assert_eq!(ColumnRange { first: 26, last: 701 }.to_string(), "AA:ZZ");
    }
}
