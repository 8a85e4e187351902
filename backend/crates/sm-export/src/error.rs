use error_location::ErrorLocation;

use std::panic::Location;

use sm_core::CoreError;
use sm_db::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{source}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error ({context}): {source} {location}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize export: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Export file '{file_name}' is not valid JSON: {source} {location}")]
    Corrupt {
        file_name: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to build archive: {source} {location}")]
    Archive {
        #[source]
        source: zip::result::ZipError,
        location: ErrorLocation,
    },

    #[error("Background task failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },
}

impl ExportError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io<S: Into<String>>(context: S, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Status code carried back to browser flows
    pub fn code(&self) -> &'static str {
        match self {
            Self::Core { .. } => "invalid_request",
            Self::NotFound { .. } => "not_found",
            _ => "io_failure",
        }
    }

    /// Message safe to show to clients; filesystem details stay in the logs
    pub fn public_message(&self) -> String {
        match self {
            Self::Core { source, .. } => match source {
                CoreError::InvalidFileName { .. } => "Invalid export file name".to_string(),
                CoreError::InvalidExportType { value, .. } => {
                    format!("Invalid export type '{value}'")
                }
            },
            Self::NotFound { message, .. } => message.clone(),
            Self::Corrupt { .. } => "Export file could not be parsed".to_string(),
            _ => "Export operation failed".to_string(),
        }
    }
}

impl From<CoreError> for ExportError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ExportError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<zip::result::ZipError> for ExportError {
    #[track_caller]
    fn from(source: zip::result::ZipError) -> Self {
        Self::Archive {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
