use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("{field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Location name already exists: {name}")]
    DuplicateNameError { name: String },

    #[error("No locations found")]
    NoLocationsError,

    #[error("Location not found: {name}")]
    NotFoundError { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },
}

/// 錯誤分類，用於決定 HTTP 狀態碼與 CLI 退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 呼叫端輸入錯誤
    Client,
    /// 與現有資料衝突
    Conflict,
    /// 目標不存在
    NotFound,
    /// 資料集狀態不允許此操作
    ResourceState,
    /// 儲存層或系統錯誤
    Server,
    Config,
}

impl LocationError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Client,
            Self::DuplicateNameError { .. } => ErrorCategory::Conflict,
            Self::NotFoundError { .. } => ErrorCategory::NotFound,
            Self::NoLocationsError => ErrorCategory::ResourceState,
            Self::IoError(_) | Self::SerializationError(_) | Self::StorageError { .. } => {
                ErrorCategory::Server
            }
            Self::ConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Client | ErrorCategory::Conflict
        )
    }

    /// 給終端使用者看的訊息，不暴露儲存層細節
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Server => "The location store is unavailable".to_string(),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => {
                "Latitude must be within -90..90 and longitude within -180..180"
            }
            Self::DuplicateNameError { .. } => {
                "Pick a different name or delete the existing location first"
            }
            Self::NoLocationsError => "Add at least one location before searching",
            Self::NotFoundError { .. } => "List locations to check the exact (case-sensitive) name",
            Self::IoError(_) | Self::StorageError { .. } => {
                "Check that the storage path exists and is writable"
            }
            Self::SerializationError(_) => {
                "The storage file may be corrupt; restore it from a backup"
            }
            Self::ConfigError { .. } => "Fix the configuration file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, LocationError>;
