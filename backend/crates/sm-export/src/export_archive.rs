use crate::{ExportError, Result as ExportErrorResult};

use sm_core::ExportFileName;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const ARCHIVE_NAME_PREFIX: &str = "migration-backup-";

const ARCHIVE_TEMP_PREFIX: &str = ".migration-backup-";
const ARCHIVE_EXTENSION: &str = ".zip";
const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// A finished ZIP of the export directory, held in memory
#[derive(Debug, Clone)]
pub struct ExportArchive {
    /// Download name, `migration-backup-YYYYMMDD-HHMMSS.zip`
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub file_count: usize,
}

/// Zip `files` into a per-call temp file inside `dir` and read it back.
///
/// The temp file is hidden and not `*.json`, so it never shows up as an
/// export, and it is deleted when this function returns on every path.
pub(crate) fn build(
    dir: &Path,
    files: &[(ExportFileName, PathBuf)],
    now: DateTime<Utc>,
) -> ExportErrorResult<ExportArchive> {
    if files.is_empty() {
        return Err(ExportError::not_found("No export files found"));
    }

    let mut temp = tempfile::Builder::new()
        .prefix(ARCHIVE_TEMP_PREFIX)
        .suffix(ARCHIVE_EXTENSION)
        .tempfile_in(dir)
        .map_err(|e| ExportError::io("create archive temp file", e))?;

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(temp.as_file_mut());
    let mut file_count = 0;

    for (name, path) in files {
        let mut source = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} vanished before it could be archived", name);
                continue;
            }
            Err(e) => return Err(ExportError::io(format!("open {name}"), e)),
        };

        zip.start_file(name.as_str(), options)?;
        io::copy(&mut source, &mut zip).map_err(|e| ExportError::io(format!("archive {name}"), e))?;
        file_count += 1;
    }

    zip.finish()?;

    if file_count == 0 {
        return Err(ExportError::not_found("No export files found"));
    }

    let bytes = fs::read(temp.path()).map_err(|e| ExportError::io("read archive", e))?;
    let file_name = format!(
        "{ARCHIVE_NAME_PREFIX}{}{ARCHIVE_EXTENSION}",
        now.format(ARCHIVE_TIMESTAMP_FORMAT)
    );

    info!(
        "Archive built: {} ({} files, {} bytes)",
        file_name,
        file_count,
        bytes.len()
    );

    Ok(ExportArchive {
        file_name,
        bytes,
        file_count,
    })
}
