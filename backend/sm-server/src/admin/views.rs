//! HTML rendering for the admin pages.
//!
//! Every dynamic value passes through [`escape`] before it is placed in the
//! markup, in text and attribute positions alike.

use crate::admin::{
    BULK_DOWNLOAD_PATH, DELETE_ALL_PATH, DELETE_PATH, HISTORY_PAGE_PATH, MIGRATION_PAGE_PATH,
};

use sm_auth::Actor;
use sm_core::ExportType;
use sm_export::DirectoryUsage;

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; background: #f0f0f1; color: #1d2327; margin: 0; }
header { background: #1d2327; color: #fff; padding: 10px 20px; }
header a { color: #72aee6; margin-right: 16px; }
.wrap { max-width: 1100px; margin: 0 auto; padding: 10px 20px; }
.card { margin-top: 20px; padding: 20px; border-radius: 8px; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.notice { padding: 8px 12px; margin: 16px 0; border-left: 4px solid; background: #fff; }
.notice-success { border-color: #00a32a; }
.notice-error { border-color: #d63638; }
.form-group { margin-bottom: 15px; }
.table-responsive { overflow-x: auto; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 8px; border-bottom: 1px solid #dcdcde; vertical-align: top; }
.description { color: #646970; }
.button-group { margin-top: 20px; }
.button-group form { display: inline; }
.success { color: #00a32a; }
.error { color: #d63638; }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A status banner; `html` is trusted markup built from escaped parts
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub html: String,
}

impl Notice {
    pub fn success(html: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            html: html.into(),
        }
    }

    pub fn error(html: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            html: html.into(),
        }
    }
}

pub struct MigrationPageView<'a> {
    pub actor: &'a Actor,
    pub notices: &'a [Notice],
    pub create_token: &'a str,
    pub exports_dir: &'a str,
}

pub struct HistoryRow {
    pub file_name: String,
    pub file_path: String,
    pub created_at: Option<String>,
    pub file_size: u64,
    pub download_url: String,
    pub delete_token: String,
}

pub struct HistoryPageView<'a> {
    pub actor: &'a Actor,
    pub notices: &'a [Notice],
    pub rows: &'a [HistoryRow],
    pub exports_dir: &'a str,
    pub usage: DirectoryUsage,
    pub delete_all_token: &'a str,
    pub bulk_download_token: &'a str,
}

pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Human-readable size with two decimals, `1.50 KB`
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.2} {}", UNITS[unit])
}

pub fn migration_page(view: &MigrationPageView<'_>) -> String {
    let mut options = String::new();
    for export_type in ExportType::ALL {
        options.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            escape(export_type.as_str()),
            escape(export_type.label())
        ));
    }

    let body = format!(
        r#"<div class="card">
<h2>Create Migration Export</h2>
<p>Generate a complete backup of your site content and configuration. Files are stored permanently in the export directory.</p>
<form method="post" action="{action}">
<input type="hidden" name="_token" value="{token}">
<div class="form-group">
<label for="export_type"><strong>Export Type:</strong></label>
<select name="export_type" id="export_type">{options}</select>
</div>
<button type="submit" class="button button-primary">Create Export File</button>
</form>
<hr>
<h3>Export Storage Location:</h3>
<p><code>{dir}</code></p>
<p class="description">All export files are saved to this directory and can be managed from the <a href="{history}">Export History</a> page.</p>
</div>"#,
        action = MIGRATION_PAGE_PATH,
        token = escape(view.create_token),
        options = options,
        dir = escape(view.exports_dir),
        history = HISTORY_PAGE_PATH,
    );

    layout("Site Migration", Some(view.actor), view.notices, &body)
}

pub fn history_page(view: &HistoryPageView<'_>) -> String {
    let mut body = String::from(r#"<div class="card"><h2>Existing Export Files</h2>"#);

    if view.rows.is_empty() {
        body.push_str(&format!(
            r#"<p class="description">No export files found. Create your first export from the <a href="{}">Site Migration</a> page.</p>"#,
            MIGRATION_PAGE_PATH
        ));
    } else {
        body.push_str(
            r#"<div class="table-responsive"><table><thead><tr><th>Filename</th><th>Date Created</th><th>File Size</th><th>Actions</th></tr></thead><tbody>"#,
        );
        for row in view.rows {
            body.push_str(&history_row(row));
        }
        body.push_str("</tbody></table></div>");
    }

    body.push_str("<hr><h3>Storage Directory Information</h3>");
    body.push_str(&format!(
        "<p><strong>Export Storage Location:</strong> <code>{}</code></p>",
        escape(view.exports_dir)
    ));

    if view.usage.exists {
        body.push_str(&format!(
            r#"<p class="success"><strong>Status:</strong> Directory exists and is writable</p>
<p><strong>Total Export Storage Used:</strong> {} ({} files)</p>"#,
            format_size(view.usage.total_bytes),
            view.rows.len()
        ));
    } else {
        body.push_str(
            r#"<p class="error"><strong>Warning:</strong> Export directory does not exist or is not writable.</p>"#,
        );
    }

    body.push_str(&format!(
        r#"<hr><h3>Management Actions</h3><div class="button-group"><a href="{}" class="button button-secondary">Create New Export</a>"#,
        MIGRATION_PAGE_PATH
    ));

    if !view.rows.is_empty() {
        body.push_str(&format!(
            r#"
<form method="post" action="{delete_all}" onsubmit="return confirm('Are you sure you want to delete ALL export files? This cannot be undone!');">
<input type="hidden" name="_token" value="{delete_token}">
<input type="hidden" name="confirm" value="yes">
<button type="submit" class="button button-danger">Delete All Exports</button>
</form>
<a href="{bulk}?_token={bulk_token}" class="button button-secondary">Download All Exports (ZIP)</a>"#,
            delete_all = DELETE_ALL_PATH,
            delete_token = escape(view.delete_all_token),
            bulk = BULK_DOWNLOAD_PATH,
            bulk_token = escape(view.bulk_download_token),
        ));
    }
    body.push_str("</div></div>");

    layout("Migration Export History", Some(view.actor), view.notices, &body)
}

fn history_row(row: &HistoryRow) -> String {
    let created = row
        .created_at
        .as_deref()
        .map(escape)
        .unwrap_or_else(|| "-".to_string());

    format!(
        r#"<tr>
<td><code>{name}</code><br><small class="description">Path: <code>{path}</code></small></td>
<td>{created}</td>
<td>{size}</td>
<td>
<a href="{download}" class="button button-small">Download</a>
<form method="post" action="{delete}" style="display:inline;" onsubmit="return confirm('Are you sure you want to delete this export file?');">
<input type="hidden" name="_token" value="{token}">
<input type="hidden" name="file" value="{name}">
<button type="submit" class="button button-small delete">Delete</button>
</form>
</td>
</tr>"#,
        name = escape(&row.file_name),
        path = escape(&row.file_path),
        created = created,
        size = format_size(row.file_size),
        download = escape(&row.download_url),
        delete = DELETE_PATH,
        token = escape(&row.delete_token),
    )
}

/// Stand-alone page for 401/403 responses
pub fn error_page(title: &'static str, message: &str) -> String {
    let body = format!(
        r#"<div class="card"><h2>{}</h2><p>{}</p></div>"#,
        title,
        escape(message)
    );
    layout(title, None, &[], &body)
}

/// `title` is a fixed label and goes into the markup as-is
fn layout(title: &'static str, actor: Option<&Actor>, notices: &[Notice], body: &str) -> String {
    let nav = match actor {
        Some(actor) => format!(
            r#"<a href="{}">Site Migration</a><a href="{}">Export History</a><span>Signed in as {}</span>"#,
            MIGRATION_PAGE_PATH,
            HISTORY_PAGE_PATH,
            escape(&actor.display_name)
        ),
        None => String::new(),
    };

    let mut banners = String::new();
    for notice in notices {
        let class = match notice.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        };
        banners.push_str(&format!(r#"<div class="{class}"><p>{}</p></div>"#, notice.html));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<header>{nav}</header>
<div class="wrap">
<h1>{title}</h1>
{banners}
{body}
</div>
</body>
</html>
"#,
        title = title,
        style = STYLE,
        nav = nav,
        banners = banners,
        body = body,
    )
}
