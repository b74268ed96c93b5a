//! 保存済み JSON レスポンスからの読み込み

use super::CountrySource;
use crate::country::CountryRecord;
use crate::error::{KycError, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

/// `GET /all` のレスポンスを保存したファイル
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CountrySource for JsonFileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn fetch_all(&self) -> Pin<Box<dyn Future<Output = Result<Vec<CountryRecord>>> + Send + '_>> {
        Box::pin(async move {
            let content = tokio::fs::read(&self.path)
                .await
                .map_err(|e| KycError::file(&self.path, e))?;
            Ok(serde_json::from_slice(&content)?)
        })
    }
}
