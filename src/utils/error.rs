use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContribError {
    #[error("User not found: {name}")]
    NotFound { name: String },

    #[error("Fetch failed with status {status}")]
    FetchFailed { status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl ContribError {
    /// 遠端回報使用者不存在
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContribError::NotFound { .. })
    }

    /// 抓取階段的失敗（網路錯誤、非 2xx/404 狀態碼等）
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, ContribError::FetchFailed { .. } | ContribError::Http(_))
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ContribError::NotFound { .. } => "user not found".to_string(),
            ContribError::ValidationError { message, .. } => message.clone(),
            ContribError::FetchFailed { .. } | ContribError::Http(_) => {
                "something went wrong".to_string()
            }
            ContribError::IoError(_) => "I/O failure, check file permissions".to_string(),
            ContribError::InvalidConfigValueError { .. }
            | ContribError::ConfigValidationError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ContribError>;
