//! tracing の初期化
//!
//! TUI は端末を占有するため、`browse` ではログファイル指定時のみ subscriber を導入する。

use crate::error::{KycError, Result};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// ログの出力先
pub enum LogTarget<'a> {
    /// 標準エラー出力
    Stderr,
    /// ファイルに追記
    File(&'a Path),
    /// 出力しない
    Disabled,
}

/// subscriber を導入（2 回目以降の呼び出しは無視される）
///
/// `level` は EnvFilter 形式。解釈できなければ `KycError::Config`。
pub fn init(target: LogTarget<'_>, level: &str) -> Result<()> {
    let filter = parse_filter(level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            let _ = builder
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| KycError::file(path, e))?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }

    Ok(())
}

fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| KycError::Config(format!("Invalid log level '{}': {}", level, e)))
}
