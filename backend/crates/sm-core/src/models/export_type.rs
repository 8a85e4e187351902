use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which collectors an export run invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportType {
    /// Content and configuration
    #[default]
    Full,
    /// Posts, pages, users and media only
    ContentOnly,
    /// Options and theme settings only
    ConfigurationOnly,
}

impl ExportType {
    pub const ALL: [ExportType; 3] = [Self::Full, Self::ContentOnly, Self::ConfigurationOnly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::ContentOnly => "content_only",
            Self::ConfigurationOnly => "configuration_only",
        }
    }

    /// Human-readable label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "Full Site Export (Content + Configuration)",
            Self::ContentOnly => "Content Only (Posts, Pages, Media)",
            Self::ConfigurationOnly => "Configuration Only (Options, Themes)",
        }
    }

    pub fn includes_content(&self) -> bool {
        matches!(self, Self::Full | Self::ContentOnly)
    }

    pub fn includes_configuration(&self) -> bool {
        matches!(self, Self::Full | Self::ConfigurationOnly)
    }
}

impl FromStr for ExportType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "full" => Ok(Self::Full),
            "content_only" => Ok(Self::ContentOnly),
            "configuration_only" => Ok(Self::ConfigurationOnly),
            _ => Err(CoreError::InvalidExportType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ExportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
