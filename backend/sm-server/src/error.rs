use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures; request-time failures go through `ApiError` or the admin redirects
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {source} {location}")]
    Config {
        #[source]
        source: sm_config::ConfigError,
        location: ErrorLocation,
    },

    #[error("Auth setup failed: {source} {location}")]
    Auth {
        #[source]
        source: sm_auth::AuthError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration failed: {source} {location}")]
    Migration {
        #[source]
        source: sm_db::DbError,
        location: ErrorLocation,
    },

    #[error("IO error at {path}: {source} {location}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl ServerError {
    #[track_caller]
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sm_config::ConfigError> for ServerError {
    #[track_caller]
    fn from(source: sm_config::ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sm_auth::AuthError> for ServerError {
    #[track_caller]
    fn from(source: sm_auth::AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for ServerError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sm_db::DbError> for ServerError {
    #[track_caller]
    fn from(source: sm_db::DbError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
