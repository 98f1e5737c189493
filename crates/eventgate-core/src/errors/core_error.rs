//! Core error type.
//! Access denials are never errors; these cover parsing and configuration only.

use super::error_code::EventgateErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown tier label: '{label}'")]
    UnknownTier { label: String },

    #[error("Unknown upgrade reason token: '{token}'")]
    UnknownReason { token: String },

    #[error("Invalid configuration: {field}: {message}")]
    InvalidConfig { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl CoreError {
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl EventgateErrorCode for CoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTier { .. } => "UNKNOWN_TIER",
            Self::UnknownReason { .. } => "UNKNOWN_REASON",
            Self::InvalidConfig { .. } => "CONFIG_INVALID",
            Self::Io(_) => "IO_ERROR",
            Self::TomlParse(_) => "CONFIG_PARSE_ERROR",
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
