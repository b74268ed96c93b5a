//! kyc list コマンド
//!
//! 国データを 1 度取得し、検索・地域フィルタ適用後の一覧を表示する。

use super::{FilterArgs, SourceArgs};
use crate::config::AppConfig;
use crate::country::CountryRecord;
use crate::directory::derive_visible;
use crate::error::Result;
use crate::logging::{self, LogTarget};
use crate::source::{load_records, select_source};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, CellAlignment, Table};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only country names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args) -> Result<()> {
    let config = AppConfig::load()?.with_base_url(args.source.base_url.clone());
    logging::init(LogTarget::Stderr, &config.log_level)?;

    // 1. 取得
    let source = select_source(args.source.from_file.as_deref(), &config)?;
    let records = load_records(source.as_ref()).await?;

    // 2. フィルタリング（取得順を維持）
    let visible = derive_visible(&records, args.filter.region(), args.filter.query());
    tracing::debug!(total = records.len(), visible = visible.len(), "filtered");

    // 3. 出力
    if args.json {
        print_json(&visible)?;
    } else if args.simple {
        print_simple(&visible, records.len());
    } else {
        print_table(&visible, records.len());
    }

    Ok(())
}

/// 空の場合のメッセージ
fn empty_message(total_count: usize) -> &'static str {
    if total_count == 0 {
        "No countries available"
    } else {
        "No countries matched"
    }
}

fn build_table(countries: &[&CountryRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Region", "Capital", "Population"]);

    for country in countries {
        table.add_row(vec![
            country.name.as_str(),
            country.region.as_str(),
            country.capital_display(),
            country.population_display().as_str(),
        ]);
    }

    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}

fn print_table(countries: &[&CountryRecord], total_count: usize) {
    if countries.is_empty() {
        println!("{}", empty_message(total_count));
        return;
    }

    println!("{}", build_table(countries));
    println!("{} of {} countries", countries.len(), total_count);
}

fn to_json(countries: &[&CountryRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(countries)?)
}

fn print_json(countries: &[&CountryRecord]) -> Result<()> {
    // 空の場合も [] を出力
    println!("{}", to_json(countries)?);
    Ok(())
}

fn print_simple(countries: &[&CountryRecord], total_count: usize) {
    if countries.is_empty() {
        println!("{}", empty_message(total_count));
        return;
    }
    for country in countries {
        println!("{}", country.name);
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
