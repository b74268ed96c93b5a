//! kyc browse コマンド
//!
//! 国データを 1 度取得し、TUI で一覧・検索・地域フィルタを行う。

use super::{FilterArgs, SourceArgs};
use crate::config::AppConfig;
use crate::directory::{ListViewController, ViewState};
use crate::error::{KycError, Result};
use crate::logging::{self, LogTarget};
use crate::source::{load_records, select_source};
use crate::tui;
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Handle;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Write logs to this file (the terminal is occupied by the UI)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

pub async fn run(args: Args) -> Result<()> {
    let config = AppConfig::load()?.with_base_url(args.source.base_url.clone());

    let target = match &args.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Disabled,
    };
    logging::init(target, &config.log_level)?;

    // 1. 取得（TUI 起動前に 1 度だけ）
    let source = select_source(args.source.from_file.as_deref(), &config)?;
    let records = load_records(source.as_ref()).await?;

    // 2. 初期状態
    let initial = initial_state(&args.filter);

    // 3. TUI はブロッキングスレッドで実行し、タイマーはランタイム側で動かす
    let runtime = Handle::current();
    tokio::task::spawn_blocking(move || {
        let controller = ListViewController::mount(runtime, initial, records);
        tui::run(controller)
    })
    .await
    .map_err(|e| KycError::Tui(format!("UI task failed: {}", e)))?
    .map_err(|e| KycError::Tui(e.to_string()))
}

/// CLI 引数からマウント時の状態を作る
fn initial_state(filter: &FilterArgs) -> ViewState {
    ViewState::mounted()
        .with_search_query(filter.query())
        .with_region_filter(filter.region())
}
