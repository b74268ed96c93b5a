mod code;
mod formatter;
mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::{ErrorContext, RichError};

use std::path::PathBuf;
use thiserror::Error;

/// KYC統一エラー型
#[derive(Debug, Error)]
pub enum KycError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Countries API error: {message} (status: {status})")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot access {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, KycError>;

impl KycError {
    /// パス付きの IO エラー
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KycError::File {
            path: path.into(),
            source,
        }
    }

    /// 対応するエラーコードを返す
    pub fn code(&self) -> ErrorCode {
        match self {
            KycError::Network(e) if e.is_timeout() => ErrorCode::Net002,
            KycError::Network(_) => ErrorCode::Net001,
            KycError::Api { status, .. } => match *status {
                429 => ErrorCode::Api001,
                404 => ErrorCode::Api002,
                s if (500..600).contains(&s) => ErrorCode::Api003,
                _ => ErrorCode::Int001,
            },
            KycError::Json(_) => ErrorCode::Api004,
            KycError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => ErrorCode::Io001,
            KycError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                ErrorCode::Io002
            }
            KycError::Io(_) => ErrorCode::Int001,
            KycError::File { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::Io001,
                std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
                _ => ErrorCode::Int001,
            },
            KycError::Config(_) => ErrorCode::Cfg001,
            KycError::Tui(_) => ErrorCode::Tui001,
        }
    }
}

impl From<KycError> for RichError {
    fn from(err: KycError) -> Self {
        let code = err.code();
        let message = err.to_string();
        let context = match &err {
            KycError::Api { url, status, .. } => ErrorContext::new()
                .with_url(url.clone())
                .with_additional("status", status.to_string()),
            KycError::Network(e) => match e.url() {
                Some(url) => ErrorContext::new().with_url(url.as_str()),
                None => ErrorContext::new(),
            },
            KycError::File { path, .. } => ErrorContext::new().with_file_path(path.clone()),
            _ => ErrorContext::new(),
        };

        let rich = RichError::new(code, message).with_context(context);
        match err {
            KycError::Network(e) => rich.with_source(e),
            KycError::Json(e) => rich.with_source(e),
            KycError::Io(e) => rich.with_source(e),
            KycError::File { source, .. } => rich.with_source(source),
            _ => rich,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
