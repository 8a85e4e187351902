
use sm_core::{
    ConfigurationExport, EXPORT_FORMAT_VERSION, ExportDocument, ExportMetadata, ExportType,
    SiteContent,
};

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 15).unwrap()
}

pub(crate) fn sample_document(export_type: ExportType, generated_at: &str) -> ExportDocument {
    let metadata = ExportMetadata {
        generated_at: generated_at.to_string(),
        site_url: "https://exämple.test".to_string(),
        platform_version: "6.4".to_string(),
        generator_version: "0.1.0".to_string(),
        export_type,
        export_version: EXPORT_FORMAT_VERSION.to_string(),
        exported_by: Some("Site Admin".to_string()),
    };

    let mut options = BTreeMap::new();
    options.insert("blogname".to_string(), serde_json::json!("Test"));

    ExportDocument::assemble(
        metadata,
        Some(SiteContent::new(Vec::new(), Vec::new(), Vec::new())),
        Some(ConfigurationExport {
            options,
            themes: BTreeMap::new(),
            database_version: Some("57155".to_string()),
            platform_version: "6.4".to_string(),
        }),
    )
}

pub(crate) fn write_raw(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

pub(crate) fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}
