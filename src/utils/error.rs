use crate::domain::model::{Direction, Mode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(#[from] UnsupportedFeatureError),

    #[error("Settings error in '{field}': {message}")]
    Settings { field: String, message: String },
}

/// 標頭或內容無法解析
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("invalid version header: {0}")]
    InvalidVersion(String),

    #[error("invalid data body: {0}")]
    InvalidData(#[source] serde_json::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unsupported {direction} mode '{value}'")]
    UnsupportedMode { direction: Direction, value: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnsupportedFeatureError {
    #[error("{mode} requires schema version {required} or newer (got {found})")]
    DhcpRequiresNewerVersion {
        mode: Mode,
        required: u32,
        found: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Format,
    Configuration,
    UnsupportedFeature,
    Settings,
}

impl PlanError {
    pub fn settings(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Settings {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanError::Io(_) => ErrorCategory::Io,
            PlanError::Format(_) => ErrorCategory::Format,
            PlanError::Configuration(_) => ErrorCategory::Configuration,
            PlanError::UnsupportedFeature(_) => ErrorCategory::UnsupportedFeature,
            PlanError::Settings { .. } => ErrorCategory::Settings,
        }
    }
}

impl ErrorCategory {
    /// CLI 結束代碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Settings => 2,
            ErrorCategory::Io => 3,
            ErrorCategory::Format => 4,
            ErrorCategory::Configuration => 5,
            ErrorCategory::UnsupportedFeature => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Io => "io",
            ErrorCategory::Format => "format",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::UnsupportedFeature => "unsupported_feature",
            ErrorCategory::Settings => "settings",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
