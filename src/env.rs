//! 環境変数ユーティリティ

/// API ベース URL を上書きする環境変数
pub const API_BASE_URL_VAR: &str = "KYC_API_BASE_URL";
/// ログレベル（EnvFilter 形式）を指定する環境変数
pub const LOG_VAR: &str = "KYC_LOG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空白のみの値は None として扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
