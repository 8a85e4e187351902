use crate::{CoreError, ExportFileName};

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 15).unwrap()
}

#[test]
fn given_timestamp_when_generate_then_name_has_fixed_layout() {
    let name = ExportFileName::generate(fixed_now(), &mut rand::rng());
    let value = name.as_str();

    assert!(value.starts_with("migration-20260314-093015-"));
    assert!(value.ends_with(".json"));
    assert_that!(value.len(), eq(39));

    let token = &value[26..34];
    assert_that!(token.chars().all(|c| c.is_ascii_alphanumeric()), eq(true));
}

#[test]
fn given_generated_name_when_parse_then_accepted() {
    let name = ExportFileName::generate(fixed_now(), &mut rand::rng());

    let parsed = ExportFileName::parse(name.as_str());

    assert_that!(parsed, ok(anything()));
    assert_eq!(parsed.unwrap(), name);
}

#[test]
fn given_same_second_when_generate_many_then_names_distinct() {
    let mut rng = rand::rng();
    let names: HashSet<ExportFileName> = (0..1000)
        .map(|_| ExportFileName::generate(fixed_now(), &mut rng))
        .collect();

    assert_that!(names.len(), eq(1000));
}

#[test]
fn given_traversal_name_when_parse_then_rejected() {
    for value in [
        "../../etc/passwd.json",
        "..json",
        "a/b.json",
        "a\\b.json",
        ".json",
        "",
        "export.json.bak",
        "export.zip",
        "name with space.json",
    ] {
        let result = ExportFileName::parse(value);
        assert!(
            matches!(result, Err(CoreError::InvalidFileName { .. })),
            "expected {value:?} to be rejected"
        );
    }
}

#[test]
fn given_custom_alphanumeric_name_when_parse_then_accepted() {
    let result = ExportFileName::parse("Backup-2024-final.json");

    assert_that!(result, ok(anything()));
}

#[test]
fn given_generated_name_when_timestamp_then_matches_creation_time() {
    let name = ExportFileName::generate(fixed_now(), &mut rand::rng());

    assert_eq!(name.timestamp(), Some(fixed_now()));
}

#[test]
fn given_foreign_layout_when_timestamp_then_none() {
    for value in [
        "migration-2026-03-14-09-30-15-abcdefgh.json",
        "backup.json",
        "migration-20261399-093015-abcdefgh.json",
        "migration-20260314-093015-abc.json",
    ] {
        assert!(
            ExportFileName::timestamp_of(value).is_none(),
            "expected no timestamp for {value:?}"
        );
    }
}
