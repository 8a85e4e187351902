//! Read and housekeeping access to the export directory.
//!
//! Every name coming from a caller goes through [`ExportFileName::parse`]
//! before a path is built, so lookups can never leave the directory.

use crate::{ExportArchive, ExportError, Result as ExportErrorResult, export_archive, format_timestamp};

use sm_core::{ExportFileInfo, ExportFileName, ExportMetadata};

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::panic::Location;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed contents of one export file
#[derive(Debug, Clone)]
pub struct StoredExport {
    pub file_name: ExportFileName,
    pub data: Value,
    pub file_size: u64,
}

/// Raw bytes of one export file, ready to stream to a client
#[derive(Debug, Clone)]
pub struct ExportDownload {
    pub file_name: ExportFileName,
    pub bytes: Vec<u8>,
    pub file_size: u64,
}

/// Summary of the export directory for the history view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryUsage {
    pub exists: bool,
    pub total_bytes: u64,
    pub file_count: usize,
}

/// Only the metadata of a document; the rest is skipped while parsing
#[derive(Deserialize)]
struct MetadataOnly {
    metadata: ExportMetadata,
}

#[derive(Debug, Clone)]
pub struct ExportStore {
    dir: PathBuf,
    base_url: String,
}

impl ExportStore {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export files, newest first. A missing directory lists as empty.
    pub fn list(&self) -> ExportErrorResult<Vec<ExportFileInfo>> {
        let mut infos = Vec::new();

        for (name, path) in self.export_files()? {
            let file_size = match fs::metadata(&path) {
                Ok(meta) => meta.len(),
                Err(e) => {
                    debug!("Skipping {} while listing: {}", name, e);
                    continue;
                }
            };

            let (created_at, export_type) = match Self::read_metadata(&path) {
                Some(metadata) => (Some(metadata.generated_at), Some(metadata.export_type)),
                None => (
                    ExportFileName::timestamp_of(name.as_str()).map(format_timestamp),
                    None,
                ),
            };

            infos.push(ExportFileInfo {
                file_name: name.to_string(),
                file_path: path.display().to_string(),
                file_url: format!("{}/{}", self.base_url, name),
                file_size,
                created_at,
                export_type,
            });
        }

        Ok(infos)
    }

    /// Parse one export file
    pub fn read(&self, name: &str) -> ExportErrorResult<StoredExport> {
        let (file_name, path) = self.resolve(name)?;

        let file = File::open(&path).map_err(|e| Self::open_error(&file_name, e))?;
        let file_size = file
            .metadata()
            .map_err(|e| ExportError::io(format!("stat {file_name}"), e))?
            .len();

        let data: Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ExportError::Corrupt {
                file_name: file_name.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(StoredExport {
            file_name,
            data,
            file_size,
        })
    }

    /// Raw bytes of one export file
    pub fn open(&self, name: &str) -> ExportErrorResult<ExportDownload> {
        let (file_name, path) = self.resolve(name)?;

        let bytes = fs::read(&path).map_err(|e| Self::open_error(&file_name, e))?;
        let file_size = bytes.len() as u64;

        Ok(ExportDownload {
            file_name,
            bytes,
            file_size,
        })
    }

    /// Remove exactly one export file
    pub fn delete(&self, name: &str) -> ExportErrorResult<()> {
        let (file_name, path) = self.resolve(name)?;

        fs::remove_file(&path).map_err(|e| Self::open_error(&file_name, e))?;

        info!("Export deleted: {}", file_name);
        Ok(())
    }

    /// Remove every export file and return how many were removed
    pub fn delete_all(&self) -> ExportErrorResult<usize> {
        let mut removed = 0;

        for (name, path) in self.export_files()? {
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("{} vanished before it could be deleted", name);
                }
                Err(e) => return Err(ExportError::io(format!("delete {name}"), e)),
            }
        }

        info!("Deleted all exports: {} file(s) removed", removed);
        Ok(removed)
    }

    /// ZIP of every export present right now
    pub fn build_archive(&self, now: DateTime<Utc>) -> ExportErrorResult<ExportArchive> {
        let files = self.export_files()?;
        export_archive::build(&self.dir, &files, now)
    }

    /// Size and count of all regular files in the directory
    pub fn usage(&self) -> ExportErrorResult<DirectoryUsage> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(DirectoryUsage {
                    exists: false,
                    total_bytes: 0,
                    file_count: 0,
                });
            }
            Err(e) => return Err(ExportError::io(format!("read {}", self.dir.display()), e)),
        };

        let mut usage = DirectoryUsage {
            exists: true,
            total_bytes: 0,
            file_count: 0,
        };
        for entry in entries.flatten() {
            if let Ok(meta) = entry.metadata()
                && meta.is_file()
            {
                usage.total_bytes += meta.len();
                usage.file_count += 1;
            }
        }

        Ok(usage)
    }

    /// Export files in the directory sorted newest first (by name, descending)
    pub(crate) fn export_files(&self) -> ExportErrorResult<Vec<(ExportFileName, PathBuf)>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ExportError::io(format!("read {}", self.dir.display()), e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ExportError::io("read directory entry", e))?;

            let Ok(raw_name) = entry.file_name().into_string() else {
                continue;
            };
            let Ok(name) = ExportFileName::parse(&raw_name) else {
                continue;
            };
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }

            files.push((name, entry.path()));
        }

        files.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(files)
    }

    /// Validate a caller-supplied name and make sure the file exists
    fn resolve(&self, name: &str) -> ExportErrorResult<(ExportFileName, PathBuf)> {
        let file_name = ExportFileName::parse(name).inspect_err(|_| {
            warn!("Rejected export file name {:?}", name);
        })?;
        let path = self.dir.join(file_name.as_str());

        if !path.is_file() {
            return Err(ExportError::not_found(format!(
                "Export file not found: {file_name}"
            )));
        }

        Ok((file_name, path))
    }

    fn open_error(file_name: &ExportFileName, e: io::Error) -> ExportError {
        if e.kind() == io::ErrorKind::NotFound {
            ExportError::not_found(format!("Export file not found: {file_name}"))
        } else {
            ExportError::io(format!("access {file_name}"), e)
        }
    }

    fn read_metadata(path: &Path) -> Option<ExportMetadata> {
        let file = File::open(path).ok()?;
        serde_json::from_reader::<_, MetadataOnly>(BufReader::new(file))
            .ok()
            .map(|doc| doc.metadata)
    }
}
