//! JSON出力
//!
//! UTF-8、非ASCII文字はエスケープせずそのまま出力する。

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wage_json_common::WorkRecord;

/// レコードを JSON 文字列にする
pub fn to_json_string(records: &[WorkRecord], indent: usize) -> Result<String> {
    let mut buf = Vec::new();
    write_json(&mut buf, records, indent)?;
    // serde_json の出力は常に UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// レコードをファイルに保存する
///
/// 出力先ディレクトリは作成しない（呼び出し側で用意する）。
pub fn write_records(path: &Path, records: &[WorkRecord], indent: usize) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, records, indent)?;
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(writer: W, records: &[WorkRecord], indent: usize) -> Result<()> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}
