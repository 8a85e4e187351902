use crate::admin::views::{HistoryPageView, HistoryRow, Notice, error_page, format_size, history_page};

use sm_auth::Actor;
use sm_export::DirectoryUsage;

#[test]
fn test_format_size_units() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(1023), "1023 B");
    assert_eq!(format_size(1536), "1.50 KB");
    assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
}

#[test]
fn given_hostile_values_when_rendering_history_then_escaped() {
    let actor = Actor::local_admin("1", "<script>alert(1)</script>");
    let rows = vec![HistoryRow {
        file_name: "migration-20260314-093015-abcd1234.json".to_string(),
        file_path: "/tmp/\"quoted\"/<dir>".to_string(),
        created_at: None,
        file_size: 2048,
        download_url: "https://admin.test/admin/actions/download?file=x&_token=t".to_string(),
        delete_token: "tok".to_string(),
    }];
    let usage = DirectoryUsage {
        exists: true,
        total_bytes: 2048,
        file_count: 1,
    };

    let html = history_page(&HistoryPageView {
        actor: &actor,
        notices: &[],
        rows: &rows,
        exports_dir: "/tmp/<exports>",
        usage,
        delete_all_token: "all",
        bulk_download_token: "bulk",
    });

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<dir>"));
    assert!(!html.contains("<exports>"));
    assert!(html.contains("migration-20260314-093015-abcd1234.json"));
    assert!(html.contains("2.00 KB"));
    assert!(html.contains("Delete All Exports"));
}

#[test]
fn given_no_rows_when_rendering_history_then_bulk_actions_hidden() {
    let actor = Actor::local_admin("1", "Admin");
    let usage = DirectoryUsage {
        exists: false,
        total_bytes: 0,
        file_count: 0,
    };

    let html = history_page(&HistoryPageView {
        actor: &actor,
        notices: &[Notice::success("Export file deleted successfully.")],
        rows: &[],
        exports_dir: "/tmp/exports",
        usage,
        delete_all_token: "all",
        bulk_download_token: "bulk",
    });

    assert!(html.contains("No export files found."));
    assert!(html.contains("does not exist"));
    assert!(html.contains("Export file deleted successfully."));
    assert!(!html.contains("Delete All Exports"));
    assert!(!html.contains("bulk-download"));
}

#[test]
fn test_error_page_has_no_navigation() {
    let html = error_page("Access denied", "You may not <do> this");

    assert!(html.contains("<h1>Access denied</h1>"));
    assert!(html.contains("&lt;do&gt;"));
    assert!(!html.contains("Signed in as"));
}
