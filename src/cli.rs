use clap::Parser;
use std::path::PathBuf;
use wage_json_common::SummaryField;

#[derive(Parser)]
#[command(name = "wage-json")]
#[command(about = "GCV保証工賃 標準作業時間シート → JSON変換ツール", long_about = None)]
pub struct Cli {
    /// Excelファイルのパス
    #[arg(short, long)]
    pub excel: PathBuf,

    /// シート名
    #[arg(short, long)]
    pub sheet: String,

    /// 出力JSONファイルのパス
    #[arg(short, long)]
    pub output: PathBuf,

    /// ヘッダー行（0始まり、省略時は設定値 = 3）
    #[arg(long)]
    pub header_row: Option<usize>,

    /// 読み込む列範囲（省略時は設定値 = A:P）
    #[arg(long)]
    pub columns: Option<String>,

    /// 設定ファイル（省略時は ~/.config/wage-json/config.json）
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 変換後に件数集計を表示
    #[arg(long)]
    pub summary: bool,

    /// 集計対象フィールド (group_id/work_code/remarks)
    #[arg(long, default_value = "group_id")]
    pub summary_field: SummaryField,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}
