//! レコードの集計
//!
//! フィールド値ごとの件数を値の昇順で返す。

use crate::record::WorkRecord;
use std::collections::BTreeMap;
use std::str::FromStr;

/// 集計対象フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryField {
    #[default]
    GroupId,
    WorkCode,
    Remarks,
}

impl SummaryField {
    fn value<'a>(&self, record: &'a WorkRecord) -> Option<&'a str> {
        match self {
            SummaryField::GroupId => record.group_id.as_deref(),
            SummaryField::WorkCode => record.work_code.as_deref(),
            SummaryField::Remarks => record.remarks.as_deref(),
        }
    }
}

impl FromStr for SummaryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "group_id" | "group" => Ok(SummaryField::GroupId),
            "work_code" | "code" => Ok(SummaryField::WorkCode),
            "remarks" => Ok(SummaryField::Remarks),
            _ => Err(format!(
                "Unknown field: {}. Use group_id, work_code, or remarks",
                s
            )),
        }
    }
}

impl std::fmt::Display for SummaryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryField::GroupId => write!(f, "group_id"),
            SummaryField::WorkCode => write!(f, "work_code"),
            SummaryField::Remarks => write!(f, "remarks"),
        }
    }
}

/// 値ごとの件数（値の昇順、`None` が先頭）
pub fn summarize(records: &[WorkRecord], field: SummaryField) -> Vec<(Option<String>, usize)> {
    let mut counts: BTreeMap<Option<&str>, usize> = BTreeMap::new();

    for record in records {
        *counts.entry(field.value(record)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(value, count)| (value.map(str::to_string), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(group: Option<&str>, code: &str) -> WorkRecord {
        WorkRecord {
            group_id: group.map(String::from),
            work_code: Some(code.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_summarize_sorted_by_value() {
        let records = vec![
            record(Some("B"), "1"),
            record(Some("A"), "2"),
            record(None, "3"),
            record(Some("B"), "4"),
        ];

        let summary = summarize(&records, SummaryField::GroupId);
        assert_eq!(
            summary,
            vec![
                (None, 1),
                (Some("A".to_string()), 1),
                (Some("B".to_string()), 2),
            ]
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&[], SummaryField::WorkCode).is_empty());
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("group".parse::<SummaryField>(), Ok(SummaryField::GroupId));
        assert_eq!("WORK_CODE".parse::<SummaryField>(), Ok(SummaryField::WorkCode));
        assert!("hours".parse::<SummaryField>().is_err());
    }
}
