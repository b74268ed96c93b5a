//! HTTP設定とアプリケーション設定
//!
//! 優先順位: CLI 引数 > 環境変数 > `~/.config/kyc/config.toml` > デフォルト

use crate::env::{EnvVar, API_BASE_URL_VAR, LOG_VAR};
use crate::error::{KycError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// REST Countries API のデフォルトベース URL
pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v2";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "kyc-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

/// config.toml の内容
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

/// 解決済みのアプリケーション設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// デフォルトパスの設定ファイルと環境変数から読み込み
    pub fn load() -> Result<Self> {
        let file = match default_config_path() {
            Some(path) => ConfigFile::load_from(&path)?,
            None => ConfigFile::default(),
        };
        Ok(Self::resolve(file))
    }

    /// 設定ファイルの値に環境変数を重ねる
    pub fn resolve(file: ConfigFile) -> Self {
        let defaults = Self::default();
        let api_base_url = EnvVar::get(API_BASE_URL_VAR)
            .or(file.api_base_url)
            .unwrap_or(defaults.api_base_url);
        let log_level = EnvVar::get(LOG_VAR)
            .or(file.log_level)
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
            log_level,
        }
    }

    /// CLI 引数でベース URL を上書き
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout: Some(Duration::from_secs(self.timeout_secs)),
            ..HttpConfig::default()
        }
    }
}

impl ConfigFile {
    /// ファイルが存在しなければデフォルト
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| KycError::file(path, e))?;
        toml::from_str(&content).map_err(|e| {
            KycError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

/// ~/.config/kyc/config.toml
fn default_config_path() -> Option<PathBuf> {
    EnvVar::get("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("kyc")
            .join("config.toml")
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
