use crate::{AuthError, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Operations protected by a single-use anti-forgery token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonceAction {
    CreateExport,
    DownloadExport,
    DeleteExport,
    DeleteAllExports,
    BulkDownloadExports,
}

impl NonceAction {
    pub const ALL: [NonceAction; 5] = [
        Self::CreateExport,
        Self::DownloadExport,
        Self::DeleteExport,
        Self::DeleteAllExports,
        Self::BulkDownloadExports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateExport => "create_export",
            Self::DownloadExport => "download_export",
            Self::DeleteExport => "delete_export",
            Self::DeleteAllExports => "delete_all_exports",
            Self::BulkDownloadExports => "bulk_download_exports",
        }
    }
}

impl fmt::Display for NonceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NonceAction {
    type Err = AuthError;

    #[track_caller]
    fn from_str(s: &str) -> AuthErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| AuthError::InvalidNonce {
                action: s.to_string(),
                message: "unknown action".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
