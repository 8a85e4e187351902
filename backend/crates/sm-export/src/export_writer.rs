//! Persists export documents.
//!
//! The document is serialized into a hidden temp file in the export
//! directory, fsynced, and only then linked under its final name with a
//! no-clobber persist. Listings only match `*.json`, so a half-written file is
//! never visible, and a temp file left behind by a failure is removed on drop.

use crate::{ExportError, Result as ExportErrorResult, format_timestamp};

use sm_core::{ExportDocument, ExportFileName, ExportOutcome};

use std::fs;
use std::io::{self, BufWriter, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

pub(crate) const TEMP_FILE_PREFIX: &str = ".migration-";
pub(crate) const TEMP_FILE_SUFFIX: &str = ".partial";

/// Name collisions tolerated before giving up
const MAX_NAME_ATTEMPTS: usize = 16;

const JSON_INDENT: &[u8] = b"    ";

/// Persisted exports are world-readable so the export URL can be served
pub const EXPORT_FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone)]
pub struct ExportWriter {
    dir: PathBuf,
    base_url: String,
    dir_mode: u32,
}

impl ExportWriter {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>, dir_mode: u32) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            dir_mode,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the export directory if needed. The configured mode is applied
    /// only when this call created it.
    pub fn ensure_dir(&self) -> ExportErrorResult<()> {
        if self.dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(&self.dir)
            .map_err(|e| ExportError::io(format!("create {}", self.dir.display()), e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.dir, fs::Permissions::from_mode(self.dir_mode))
                .map_err(|e| ExportError::io(format!("chmod {}", self.dir.display()), e))?;
        }

        info!(
            "Created export directory {} (mode {:#o})",
            self.dir.display(),
            self.dir_mode
        );
        Ok(())
    }

    /// Serialize `document` and persist it under a fresh name built from `now`
    pub fn write(
        &self,
        document: &ExportDocument,
        now: DateTime<Utc>,
    ) -> ExportErrorResult<ExportOutcome> {
        self.ensure_dir()?;

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(TEMP_FILE_SUFFIX)
            .tempfile_in(&self.dir)
            .map_err(|e| ExportError::io("create temp file", e))?;

        Self::serialize_into(document, &mut temp)?;

        temp.as_file()
            .sync_all()
            .map_err(|e| ExportError::io("sync temp file", e))?;
        let file_size = temp
            .as_file()
            .metadata()
            .map_err(|e| ExportError::io("stat temp file", e))?
            .len();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(EXPORT_FILE_MODE))
                .map_err(|e| ExportError::io("chmod temp file", e))?;
        }

        let file_name = self.persist(temp, now)?;
        let file_path = self.dir.join(file_name.as_str());

        info!(
            "Export created: {} ({} bytes, type {})",
            file_name, file_size, document.metadata.export_type
        );

        Ok(ExportOutcome {
            file_url: format!("{}/{}", self.base_url, file_name),
            file_path: file_path.display().to_string(),
            file_name,
            file_size,
            created_at: format_timestamp(now),
            export_type: document.metadata.export_type,
        })
    }

    fn serialize_into(document: &ExportDocument, temp: &mut NamedTempFile) -> ExportErrorResult<()> {
        let mut writer = BufWriter::new(temp);
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut writer,
            PrettyFormatter::with_indent(JSON_INDENT),
        );

        document
            .serialize(&mut serializer)
            .map_err(|source| ExportError::Serialization {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        writer
            .flush()
            .map_err(|e| ExportError::io("flush temp file", e))
    }

    fn persist(&self, mut temp: NamedTempFile, now: DateTime<Utc>) -> ExportErrorResult<ExportFileName> {
        let mut rng = rand::rng();

        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = ExportFileName::generate(now, &mut rng);

            match temp.persist_noclobber(self.dir.join(name.as_str())) {
                Ok(_) => return Ok(name),
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                    warn!("Export name {} already taken, retrying", name);
                    temp = e.file;
                }
                Err(e) => return Err(ExportError::io("persist export file", e.error)),
            }
        }

        Err(ExportError::io(
            "persist export file",
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                "no free export file name after repeated attempts",
            ),
        ))
    }
}
