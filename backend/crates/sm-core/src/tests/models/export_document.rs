use crate::{
    ConfigurationExport, EXPORT_FORMAT_VERSION, ExportDocument, ExportMetadata, ExportType,
    SiteContent,
};

use std::collections::BTreeMap;

use serde_json::json;

fn metadata(export_type: ExportType) -> ExportMetadata {
    ExportMetadata {
        generated_at: "2026-03-14T09:30:15Z".to_string(),
        site_url: "https://example.test".to_string(),
        platform_version: "6.4.2".to_string(),
        generator_version: "0.1.0".to_string(),
        export_type,
        export_version: EXPORT_FORMAT_VERSION.to_string(),
        exported_by: None,
    }
}

fn configuration() -> ConfigurationExport {
    let mut options = BTreeMap::new();
    options.insert("blogname".to_string(), json!("Test"));

    ConfigurationExport {
        options,
        themes: BTreeMap::new(),
        database_version: Some("57155".to_string()),
        platform_version: "6.4.2".to_string(),
    }
}

fn content() -> SiteContent {
    SiteContent::new(Vec::new(), Vec::new(), Vec::new())
}

#[test]
fn test_assemble_keeps_only_sections_for_export_type() {
    for export_type in ExportType::ALL {
        let document = ExportDocument::assemble(
            metadata(export_type),
            Some(content()),
            Some(configuration()),
        );

        assert_eq!(document.wordpress.is_some(), export_type.includes_content());
        assert_eq!(
            document.configuration.is_some(),
            export_type.includes_configuration()
        );
        assert_eq!(document.metadata.export_type, export_type);
    }
}

#[test]
fn test_configuration_only_document_omits_wordpress_key() {
    let document = ExportDocument::assemble(
        metadata(ExportType::ConfigurationOnly),
        None,
        Some(configuration()),
    );

    let value = serde_json::to_value(&document).unwrap();

    assert!(value.get("wordpress").is_none());
    assert_eq!(value["configuration"]["options"]["blogname"], "Test");
    assert_eq!(value["metadata"]["export_type"], "configuration_only");
    assert!(value["metadata"].get("exported_by").is_none());
}

#[test]
fn test_site_content_counts_follow_collections() {
    let content = SiteContent::new(Vec::new(), Vec::new(), Vec::new());

    assert_eq!(content.total_posts, 0);
    assert_eq!(content.total_users, 0);
    assert_eq!(content.total_media, 0);
}

#[test]
fn test_document_parses_back_from_json() {
    let mut meta = metadata(ExportType::Full);
    meta.exported_by = Some("Site Admin".to_string());
    let document = ExportDocument::assemble(meta, Some(content()), Some(configuration()));

    let text = serde_json::to_string(&document).unwrap();
    let parsed: ExportDocument = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, document);
}
