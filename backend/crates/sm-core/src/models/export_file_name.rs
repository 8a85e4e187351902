//! Export file naming.
//!
//! Generated names look like `migration-20260314-093015-a8Kq2ZxP.json`: UTC date,
//! UTC time and an 8 character alphanumeric token. The timestamp prefix makes a
//! descending lexical sort list the newest export first.
//!
//! Names accepted from callers only have to match `[A-Za-z0-9-]+\.json`, which
//! rules out path separators and `..` before any filesystem access happens.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDateTime, Utc};
use error_location::ErrorLocation;
use rand::{Rng, distr::Alphanumeric};
use serde::Serialize;

pub const FILE_NAME_PREFIX: &str = "migration-";
pub const FILE_NAME_EXTENSION: &str = ".json";
pub const RANDOM_TOKEN_LENGTH: usize = 8;

const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// A validated export file name (no directory component)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ExportFileName(String);

impl ExportFileName {
    /// Build a fresh name for an export created at `now`
    pub fn generate<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let token: String = (0..RANDOM_TOKEN_LENGTH)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();

        Self(format!(
            "{FILE_NAME_PREFIX}{}-{token}{FILE_NAME_EXTENSION}",
            now.format(TIMESTAMP_FORMAT)
        ))
    }

    /// Validate a caller-supplied name
    #[track_caller]
    pub fn parse(value: &str) -> CoreErrorResult<Self> {
        let stem = value.strip_suffix(FILE_NAME_EXTENSION).unwrap_or_default();

        let valid = !stem.is_empty()
            && stem
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');

        if !valid {
            return Err(CoreError::InvalidFileName {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creation time encoded in a generated name.
    ///
    /// Only names in the exact generated layout yield a timestamp; anything
    /// else returns `None` rather than guessing from fragments.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        Self::timestamp_of(&self.0)
    }

    /// Same as [`ExportFileName::timestamp`] for an unvalidated name
    pub fn timestamp_of(name: &str) -> Option<DateTime<Utc>> {
        let body = name
            .strip_prefix(FILE_NAME_PREFIX)?
            .strip_suffix(FILE_NAME_EXTENSION)?;

        let (stamp, token) = body.rsplit_once('-')?;
        if token.len() != RANDOM_TOKEN_LENGTH || !token.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return None;
        }

        NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}

impl std::fmt::Display for ExportFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExportFileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
