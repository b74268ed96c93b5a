//! 国データソース
//!
//! ## 使い方
//!
//! ```ignore
//! let source = select_source(args.from_file.as_deref(), &config)?;
//! let records = source.fetch_all().await?;
//! ```

mod file_source;
mod rest_source;

pub use file_source::JsonFileSource;
pub use rest_source::RestCountriesClient;

use crate::config::AppConfig;
use crate::country::CountryRecord;
use crate::error::Result;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

/// 国データソースの抽象化
///
/// 1 回の読み取りで国レコードの配列を返す。呼び出しはページ生成時（TUI 起動前）に 1 度だけ。
pub trait CountrySource: Send + Sync {
    /// 取得元の表示名（ログ用）
    fn describe(&self) -> String;

    /// 全レコードを取得
    fn fetch_all(&self) -> Pin<Box<dyn Future<Output = Result<Vec<CountryRecord>>> + Send + '_>>;
}

/// `--from-file` が指定されていればファイル、なければ REST API を使う
pub fn select_source(from_file: Option<&Path>, config: &AppConfig) -> Result<Box<dyn CountrySource>> {
    match from_file {
        Some(path) => Ok(Box::new(JsonFileSource::new(path))),
        None => Ok(Box::new(RestCountriesClient::new(
            &config.api_base_url,
            &config.http_config(),
        )?)),
    }
}

/// 選択したソースからレコードを取得してログに残す
pub async fn load_records(source: &dyn CountrySource) -> Result<Vec<CountryRecord>> {
    tracing::info!(source = %source.describe(), "fetching countries");
    let records = source.fetch_all().await?;
    tracing::info!(count = records.len(), "countries loaded");
    Ok(records)
}
