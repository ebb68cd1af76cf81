//! セル値の型定義
//!
//! ワークシートのセルは文字列・数値・空のいずれかとして取り込み、
//! フィールドごとの正規化ルール（文字列化・数値化）をここで適用する。

use std::fmt;

/// 欠損扱いになる文字列リテラル
const NAN_LITERAL: &str = "nan";

/// 取り込み時のセル値
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// 欠損値かどうか
    ///
    /// 空セル・空白のみの文字列・リテラル `nan`・NaN を欠損とみなす。
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(v) => v.is_nan(),
            CellValue::Text(s) => is_missing_text(s.trim()),
        }
    }

    /// 文字列化して前後の空白を除去する。`nan` と空文字は `None`
    pub fn normalized_text(&self) -> Option<String> {
        let rendered = match self {
            CellValue::Empty => return None,
            CellValue::Number(v) if v.is_nan() => return None,
            CellValue::Number(v) => render_number(*v),
            CellValue::Text(s) => s.clone(),
        };

        let trimmed = rendered.trim();
        if is_missing_text(trimmed) {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// 数値として解釈する。解釈できない場合や有限値でない場合は `None`
    pub fn parse_number(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(v) => Some(*v),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Empty => None,
        };

        value.filter(|v| v.is_finite())
    }

    /// 数値に変換する。解釈できない値は 0.0
    pub fn to_hours(&self) -> f64 {
        self.parse_number().unwrap_or(0.0)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(v) => write!(f, "{}", render_number(*v)),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

fn is_missing_text(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed == NAN_LITERAL
}

/// 整数値は小数部なしで出力（作業コード等が `1001.0` にならないように）
fn render_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing() {
        assert!(CellValue::Empty.is_missing());
        assert!(CellValue::text("").is_missing());
        assert!(CellValue::text("   ").is_missing());
        assert!(CellValue::text("nan").is_missing());
        assert!(CellValue::Number(f64::NAN).is_missing());
        assert!(!CellValue::text("G1").is_missing());
        assert!(!CellValue::text("NaN").is_missing());
        assert!(!CellValue::Number(0.0).is_missing());
    }

    #[test]
    fn test_normalized_text_trims() {
        assert_eq!(CellValue::text("  WC1 \t").normalized_text(), Some("WC1".to_string()));
        assert_eq!(CellValue::text(" nan ").normalized_text(), None);
        assert_eq!(CellValue::text("").normalized_text(), None);
        assert_eq!(CellValue::Empty.normalized_text(), None);
    }

    #[test]
    fn test_normalized_text_numbers() {
        assert_eq!(CellValue::Number(1001.0).normalized_text(), Some("1001".to_string()));
        assert_eq!(CellValue::Number(-3.0).normalized_text(), Some("-3".to_string()));
        assert_eq!(CellValue::Number(1.25).normalized_text(), Some("1.25".to_string()));
        assert_eq!(CellValue::Number(f64::NAN).normalized_text(), None);
    }

    #[test]
    fn test_to_hours() {
        assert_eq!(CellValue::Number(1.5).to_hours(), 1.5);
        assert_eq!(CellValue::text(" 2.25 ").to_hours(), 2.25);
        assert_eq!(CellValue::text("1e1").to_hours(), 10.0);
        assert_eq!(CellValue::text("-0.5").to_hours(), -0.5);
        assert_eq!(CellValue::text("abc").to_hours(), 0.0);
        assert_eq!(CellValue::text("1,000").to_hours(), 0.0);
        assert_eq!(CellValue::text("NaN").to_hours(), 0.0);
        assert_eq!(CellValue::Number(f64::NAN).to_hours(), 0.0);
        assert_eq!(CellValue::Empty.to_hours(), 0.0);
    }

    #[test]
    fn test_to_hours_non_finite() {
        assert_eq!(CellValue::text("inf").to_hours(), 0.0);
        assert_eq!(CellValue::text("-infinity").to_hours(), 0.0);
        assert_eq!(CellValue::text("1e400").to_hours(), 0.0);
        assert_eq!(CellValue::Number(f64::INFINITY).to_hours(), 0.0);
        assert_eq!(CellValue::Number(f64::NEG_INFINITY).parse_number(), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(CellValue::text("3").parse_number(), Some(3.0));
        assert_eq!(CellValue::text("three").parse_number(), None);
        assert_eq!(CellValue::Empty.parse_number(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::text("비고").to_string(), "비고");
        assert_eq!(CellValue::Number(7.0).to_string(), "7");
    }
}
