use clap::Parser;
use gcv_wage_json::{cli, config, converter, error, reader};
use cli::Cli;
use config::Config;
use error::Result;
use reader::{ColumnRange, SheetLayout};
use tracing_subscriber::EnvFilter;
use wage_json_common::summarize;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let column_range = cli.columns.as_deref().unwrap_or(&config.column_range);
    let options = converter::ConvertOptions {
        excel: cli.excel.clone(),
        sheet: cli.sheet.clone(),
        output: cli.output.clone(),
        layout: SheetLayout {
            header_row: cli.header_row.unwrap_or(config.header_row),
            columns: ColumnRange::parse(column_range)?,
        },
        columns: config.columns.clone(),
        indent: config.indent,
    };

    println!("📄 wage-json - 標準作業時間 JSON変換\n");

    // 1. 読み込み・正規化
    println!(
        "[1/2] シートを読み込み中... ({} / {})",
        options.excel.display(),
        options.sheet
    );
    let report = converter::load_records(&options)?;
    println!(
        "✔ {}行中 {}件を変換（作業コードなし {}行を除外）\n",
        report.stats.total_rows,
        report.records.len(),
        report.stats.dropped_rows
    );
    if report.stats.coerced_man_hours > 0 {
        println!(
            "⚠ M/H を数値に変換できず 0.0 にしたセル: {}件\n",
            report.stats.coerced_man_hours
        );
    }

    // 2. 保存
    println!("[2/2] JSONを保存中...");
    converter::save_records(&options, &report)?;

    if cli.summary {
        println!("\n集計 ({}):", cli.summary_field);
        for (value, count) in summarize(&report.records, cli.summary_field) {
            println!("  {}: {}", value.as_deref().unwrap_or("(none)"), count);
        }
    }

    println!(
        "\n✅ '{}' 保存完了! 合計 {}件",
        options.output.display(),
        report.records.len()
    );
    Ok(())
}
