//! Async entry point shared by the API and the admin pages.
//!
//! Collection runs on the async pool against SQLite; everything touching the
//! export directory runs on tokio's blocking pool.

use crate::{
    ConfigurationCollector, ContentCollector, DirectoryUsage, ExportArchive, ExportDownload,
    ExportError, ExportStore, ExportWriter, Result as ExportErrorResult, StoredExport,
    format_timestamp,
};

use sm_core::{
    EXPORT_FORMAT_VERSION, ExportDocument, ExportFileInfo, ExportMetadata, ExportOutcome,
    ExportType,
};
use sm_db::OptionRepository;
use sm_db::repositories::option_repository::HOME_OPTION;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use error_location::ErrorLocation;
use log::debug;
use sqlx::SqlitePool;

/// Everything the service needs besides the database
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub exports_dir: PathBuf,
    /// Public base URL of the export directory
    pub exports_url: String,
    pub dir_mode: u32,
    /// Fallback when the content database has no `home` option
    pub site_url: String,
    pub platform_version: String,
    pub uploads_url: Option<String>,
    pub generator_version: String,
}

#[derive(Clone)]
pub struct ExportService {
    pool: SqlitePool,
    settings: Arc<ExportSettings>,
    writer: ExportWriter,
    store: ExportStore,
}

impl ExportService {
    pub fn new(pool: SqlitePool, settings: ExportSettings) -> Self {
        let writer = ExportWriter::new(
            settings.exports_dir.clone(),
            settings.exports_url.clone(),
            settings.dir_mode,
        );
        let store = ExportStore::new(settings.exports_dir.clone(), settings.exports_url.clone());

        Self {
            pool,
            settings: Arc::new(settings),
            writer,
            store,
        }
    }

    pub fn exports_dir(&self) -> &Path {
        &self.settings.exports_dir
    }

    /// Collect, assemble and persist one export
    pub async fn create_export(
        &self,
        export_type: ExportType,
        exported_by: Option<String>,
    ) -> ExportErrorResult<ExportOutcome> {
        let now = Utc::now().trunc_subsecs(0);

        let content = if export_type.includes_content() {
            Some(
                ContentCollector::new(self.pool.clone(), self.settings.uploads_url.clone())
                    .collect()
                    .await?,
            )
        } else {
            None
        };

        let configuration = if export_type.includes_configuration() {
            Some(
                ConfigurationCollector::new(
                    self.pool.clone(),
                    self.settings.platform_version.clone(),
                )
                .collect()
                .await?,
            )
        } else {
            None
        };

        let metadata = ExportMetadata {
            generated_at: format_timestamp(now),
            site_url: self.site_url().await?,
            platform_version: self.settings.platform_version.clone(),
            generator_version: self.settings.generator_version.clone(),
            export_type,
            export_version: EXPORT_FORMAT_VERSION.to_string(),
            exported_by,
        };

        let document = ExportDocument::assemble(metadata, content, configuration);
        debug!("Export document assembled ({})", export_type);

        let writer = self.writer.clone();
        run_blocking(move || writer.write(&document, now)).await
    }

    pub async fn list(&self) -> ExportErrorResult<Vec<ExportFileInfo>> {
        let store = self.store.clone();
        run_blocking(move || store.list()).await
    }

    pub async fn read(&self, name: &str) -> ExportErrorResult<StoredExport> {
        let store = self.store.clone();
        let name = name.to_string();
        run_blocking(move || store.read(&name)).await
    }

    pub async fn open(&self, name: &str) -> ExportErrorResult<ExportDownload> {
        let store = self.store.clone();
        let name = name.to_string();
        run_blocking(move || store.open(&name)).await
    }

    pub async fn delete(&self, name: &str) -> ExportErrorResult<()> {
        let store = self.store.clone();
        let name = name.to_string();
        run_blocking(move || store.delete(&name)).await
    }

    pub async fn delete_all(&self) -> ExportErrorResult<usize> {
        let store = self.store.clone();
        run_blocking(move || store.delete_all()).await
    }

    pub async fn build_archive(&self) -> ExportErrorResult<ExportArchive> {
        let store = self.store.clone();
        let now = Utc::now();
        run_blocking(move || store.build_archive(now)).await
    }

    pub async fn usage(&self) -> ExportErrorResult<DirectoryUsage> {
        let store = self.store.clone();
        run_blocking(move || store.usage()).await
    }

    async fn site_url(&self) -> ExportErrorResult<String> {
        let home = OptionRepository::new(self.pool.clone())
            .find_value(HOME_OPTION)
            .await?
            .filter(|url| !url.trim().is_empty());

        Ok(home.unwrap_or_else(|| self.settings.site_url.clone()))
    }
}

async fn run_blocking<T, F>(work: F) -> ExportErrorResult<T>
where
    F: FnOnce() -> ExportErrorResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ExportError::Task {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
}
