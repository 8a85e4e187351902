use crate::{CoreError, ExportType};

use std::str::FromStr;

#[test]
fn test_export_type_as_str() {
    assert_eq!(ExportType::Full.as_str(), "full");
    assert_eq!(ExportType::ContentOnly.as_str(), "content_only");
    assert_eq!(ExportType::ConfigurationOnly.as_str(), "configuration_only");
}

#[test]
fn test_export_type_from_str_round_trips_every_variant() {
    for export_type in ExportType::ALL {
        assert_eq!(
            ExportType::from_str(export_type.as_str()).unwrap(),
            export_type
        );
    }
}

#[test]
fn test_export_type_from_str_rejects_unknown() {
    let result = ExportType::from_str("everything");

    assert!(matches!(
        result,
        Err(CoreError::InvalidExportType { ref value, .. }) if value == "everything"
    ));
}

#[test]
fn test_export_type_from_str_is_case_sensitive() {
    assert!(ExportType::from_str("FULL").is_err());
}

#[test]
fn test_export_type_default_is_full() {
    assert_eq!(ExportType::default(), ExportType::Full);
}

#[test]
fn test_export_type_section_flags() {
    assert!(ExportType::Full.includes_content());
    assert!(ExportType::Full.includes_configuration());

    assert!(ExportType::ContentOnly.includes_content());
    assert!(!ExportType::ContentOnly.includes_configuration());

    assert!(!ExportType::ConfigurationOnly.includes_content());
    assert!(ExportType::ConfigurationOnly.includes_configuration());
}

#[test]
fn test_export_type_serializes_snake_case() {
    let json = serde_json::to_string(&ExportType::ConfigurationOnly).unwrap();
    assert_eq!(json, "\"configuration_only\"");

    let parsed: ExportType = serde_json::from_str("\"content_only\"").unwrap();
    assert_eq!(parsed, ExportType::ContentOnly);
}
