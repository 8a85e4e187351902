pub mod collectors;
pub mod error;
pub mod export_archive;
pub mod export_service;
pub mod export_store;
pub mod export_writer;

pub use collectors::{ConfigurationCollector, ContentCollector};
pub use error::{ExportError, Result};
pub use export_archive::{ARCHIVE_NAME_PREFIX, ExportArchive};
pub use export_service::{ExportService, ExportSettings};
pub use export_store::{DirectoryUsage, ExportDownload, ExportStore, StoredExport};
pub use export_writer::ExportWriter;

use chrono::{DateTime, SecondsFormat, Utc};

/// Timestamp format used in metadata and listings
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests;
