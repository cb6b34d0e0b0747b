use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which required input a pre-flight check was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    IconDirectory,
    PrimaryDocument,
    AlternateDocument,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::IconDirectory => write!(f, "Icons directory"),
            PathKind::PrimaryDocument => write!(f, "Primary document"),
            PathKind::AlternateDocument => write!(f, "Alternate document"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("{kind} not found: {}", .path.display())]
    PathNotFound { kind: PathKind, path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SyncError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::ConfigError { .. }
            | SyncError::ConfigValidationError { .. }
            | SyncError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SyncError::PathNotFound { .. } => ErrorCategory::Input,
            SyncError::IoError(_) | SyncError::SerializationError(_) => ErrorCategory::Output,
            SyncError::PatternError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
            ErrorCategory::Internal => ErrorSeverity::Medium,
        }
    }

    /// Process exit status for a failed run: 3 when output could not be
    /// written, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Critical => 3,
            _ => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SyncError::PathNotFound { kind, path } => format!(
                "Check that the {} exists at '{}' or pass --root to run from the project directory",
                kind.to_string().to_lowercase(),
                path.display()
            ),
            SyncError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            SyncError::ConfigValidationError { field, .. }
            | SyncError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            SyncError::IoError(_) => "Check file permissions and available disk space".to_string(),
            SyncError::SerializationError(_) => {
                "Check that the report file path is writable".to_string()
            }
            SyncError::PatternError(_) => {
                "Check the configured identifiers for unusual characters".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SyncError::PathNotFound { kind, path } => {
                format!("{} not found: {}", kind, path.display())
            }
            SyncError::ConfigError { message } => format!("Configuration problem: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
