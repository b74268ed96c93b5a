//! 共通HTTPヘルパー

use crate::error::{KycError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// スピナー付きで JSON を GET
///
/// 2xx 以外のステータスは `KycError::Api` に変換する。
pub async fn get_json_with_spinner<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    label: &str,
) -> Result<T> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = get_json(client, url).await;
    pb.finish_and_clear();
    result
}

/// JSON を GET
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    tracing::debug!(%url, "GET");
    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(api_error(url, status.as_u16(), message));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// API エラーを構築（本文が空ならステータスの説明文を使う）
fn api_error(url: &str, status: u16, message: String) -> KycError {
    let message = if message.trim().is_empty() {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("unexpected status")
            .to_string()
    } else {
        message.trim().to_string()
    };

    KycError::Api {
        url: url.to_string(),
        status,
        message,
    }
}
