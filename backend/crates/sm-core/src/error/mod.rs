use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid export type: {value} {location}")]
    InvalidExportType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid export file name: {value} {location}")]
    InvalidFileName {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
