//! REST Countries API クライアント

use super::CountrySource;
use crate::config::HttpConfig;
use crate::country::{CountryRecord, FIELDS};
use crate::error::Result;
use crate::http;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

/// REST Countries API クライアント
pub struct RestCountriesClient {
    http: Client,
    base_url: String,
}

impl RestCountriesClient {
    /// 新しいクライアントを作成
    pub fn new(base_url: &str, config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            http: config.build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 全件取得 URL（フィールド射影付き）
    pub fn all_url(&self) -> String {
        format!("{}/all?fields={}", self.base_url, FIELDS)
    }
}

impl CountrySource for RestCountriesClient {
    fn describe(&self) -> String {
        self.all_url()
    }

    fn fetch_all(&self) -> Pin<Box<dyn Future<Output = Result<Vec<CountryRecord>>> + Send + '_>> {
        Box::pin(async move {
            let url = self.all_url();
            http::get_json_with_spinner(&self.http, &url, "Fetching countries...").await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_url_uses_fixed_projection() {
        let client = RestCountriesClient::new("http://localhost:9000/v2/", &HttpConfig::default())
            .unwrap();
        assert_eq!(
            client.all_url(),
            "http://localhost:9000/v2/all?fields=alpha3Code,name,flags,population,region,capital"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let config = HttpConfig {
            timeout: Some(std::time::Duration::from_secs(2)),
            ..HttpConfig::default()
        };
        // ポート 9 (discard) へは接続できない前提
        let client = RestCountriesClient::new("http://127.0.0.1:9/v2", &config).unwrap();
        let err = client.fetch_all().await.unwrap_err();
        assert!(matches!(err, crate::error::KycError::Network(_)));
    }
}
