use crate::admin::notices::{StatusQuery, redirect_error, redirect_with};
use crate::admin::views::NoticeKind;

use axum::response::IntoResponse;
use http::{StatusCode, header};

const PUBLIC_URL: &str = "https://admin.test";

fn query(status: &str) -> StatusQuery {
    StatusQuery {
        status: Some(status.to_string()),
        ..StatusQuery::default()
    }
}

#[test]
fn given_export_created_with_http_url_when_building_notices_then_link_rendered() {
    let mut q = query("export_created");
    q.download_url = Some("https://admin.test/admin/actions/download?file=a&_token=b".to_string());

    let notices = q.notices(PUBLIC_URL);

    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert!(notices[0].html.contains("Download Export"));
    assert!(notices[0].html.contains("&amp;_token"));
}

#[test]
fn given_off_site_url_when_building_notices_then_no_link() {
    let mut q = query("export_created");
    q.download_url = Some("https://evil.example/admin/actions/download?file=a&_token=b".to_string());

    let notices = q.notices(PUBLIC_URL);

    assert!(notices[0].html.contains("Export file created successfully!"));
    assert!(!notices[0].html.contains("<a"));
}

#[test]
fn given_public_url_prefix_without_download_path_when_building_notices_then_no_link() {
    let mut q = query("export_created");
    q.download_url = Some("https://admin.test.evil.example/admin/actions/download?x".to_string());

    assert!(!q.notices(PUBLIC_URL)[0].html.contains("<a"));
}

#[test]
fn given_script_url_when_building_notices_then_no_link() {
    let mut q = query("export_created");
    q.download_url = Some("javascript:alert(1)".to_string());

    let notices = q.notices(PUBLIC_URL);

    assert!(!notices[0].html.contains("<a"));
}

#[test]
fn given_error_codes_when_building_notices_then_matching_messages() {
    let mut q = query("error");
    q.code = Some("not_found".to_string());
    assert!(q.notices(PUBLIC_URL)[0].html.contains("was not found"));
    assert_eq!(q.notices(PUBLIC_URL)[0].kind, NoticeKind::Error);

    q.code = Some("invalid_request".to_string());
    assert!(q.notices(PUBLIC_URL)[0].html.contains("security token"));
}

#[test]
fn given_deleted_all_with_bad_count_when_building_notices_then_zero() {
    let mut q = query("deleted_all");
    q.count = Some("<b>".to_string());

    assert_eq!(q.notices(PUBLIC_URL)[0].html, "Deleted 0 export file(s).");
}

#[test]
fn given_unknown_or_absent_status_when_building_notices_then_none() {
    assert!(query("urls_updated").notices(PUBLIC_URL).is_empty());
    assert!(StatusQuery::default().notices(PUBLIC_URL).is_empty());
}

#[test]
fn test_redirect_error_is_see_other_with_encoded_query() {
    let response = redirect_error("/admin/migration", "io_failure").into_response();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/admin/migration?status=error&code=io_failure"
    );
}

#[test]
fn test_redirect_with_encodes_values() {
    let response = redirect_with("/admin/migration", &[("download_url", "https://a.test/x?y=1&z=2")])
        .into_response();

    assert_eq!(
        response.headers()[header::LOCATION],
        "/admin/migration?download_url=https%3A%2F%2Fa.test%2Fx%3Fy%3D1%26z%3D2"
    );
}
