use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown bundle: {name}")]
    UnknownBundle { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that failed with this severity.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ArtifactError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ArtifactError::IoError(_)
            | ArtifactError::WriteError { .. }
            | ArtifactError::ReadError { .. } => ErrorCategory::Filesystem,
            ArtifactError::SerializationError(_) => ErrorCategory::Serialization,
            ArtifactError::ConfigError { .. }
            | ArtifactError::InvalidConfigValueError { .. }
            | ArtifactError::UnknownBundle { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Filesystem => match self.io_kind() {
                Some(std::io::ErrorKind::StorageFull) => ErrorSeverity::Critical,
                Some(std::io::ErrorKind::Interrupted) => ErrorSeverity::Medium,
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ArtifactError::WriteError { path, source } => {
                format!("Could not write '{}': {}", path, source)
            }
            ArtifactError::ReadError { path, source } => {
                format!("Could not read '{}': {}", path, source)
            }
            ArtifactError::IoError(e) => format!("File system error: {}", e),
            ArtifactError::SerializationError(e) => {
                format!("Could not serialize payload as JSON: {}", e)
            }
            ArtifactError::ConfigError { message } => format!("Invalid configuration: {}", message),
            ArtifactError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for '{}': {}", field, reason)
            }
            ArtifactError::UnknownBundle { name } => format!(
                "Unknown bundle '{}'. Known bundles: catalog, infra, docs, social",
                name
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.io_kind() {
            Some(std::io::ErrorKind::NotFound) => {
                "Create the output directory first; it is never created automatically"
            }
            Some(std::io::ErrorKind::PermissionDenied) => {
                "Check the permissions of the output directory"
            }
            Some(std::io::ErrorKind::StorageFull) => {
                "Free disk space and run again; partially written files will be overwritten"
            }
            _ => match self.category() {
                ErrorCategory::Configuration => "Run with --help to see the accepted options",
                ErrorCategory::Serialization => "Check the literal payload definitions",
                ErrorCategory::Filesystem => "Check the output path and run again",
            },
        }
    }

    fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            ArtifactError::IoError(e)
            | ArtifactError::WriteError { source: e, .. }
            | ArtifactError::ReadError { source: e, .. } => Some(e.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtifactError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_missing_directory_suggestion() {
        let err = ArtifactError::WriteError {
            path: "missing/produtos.json".to_string(),
            source: Error::new(ErrorKind::NotFound, "No such file or directory"),
        };

        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("missing/produtos.json"));
        assert!(err.recovery_suggestion().contains("never created"));
    }

    #[test]
    fn test_storage_full_is_critical() {
        let err = ArtifactError::IoError(Error::new(ErrorKind::StorageFull, "disk full"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_write_error_exit_codes() {
        let write_error = |kind: ErrorKind| ArtifactError::WriteError {
            path: "dist/produtos.json".to_string(),
            source: Error::new(kind, "write failed"),
        };

        assert_eq!(write_error(ErrorKind::Interrupted).severity().exit_code(), 2);
        assert_eq!(write_error(ErrorKind::StorageFull).severity().exit_code(), 3);
        assert_eq!(write_error(ErrorKind::PermissionDenied).severity().exit_code(), 1);
        assert_eq!(write_error(ErrorKind::NotFound).severity().exit_code(), 1);
    }

    #[test]
    fn test_configuration_errors_exit_with_one() {
        let err = ArtifactError::ConfigError {
            message: "TOML parsing error".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.severity().exit_code(), 1);
    }

    #[test]
    fn test_unknown_bundle_lists_known_names() {
        let err = ArtifactError::UnknownBundle {
            name: "blog".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("catalog, infra, docs, social"));
    }
}
