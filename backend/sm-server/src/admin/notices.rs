use crate::admin::views::{Notice, escape};
use crate::app_state::DOWNLOAD_ACTION_PATH;

use axum::response::Redirect;
use serde::Deserialize;
use url::form_urlencoded;

pub const STATUS_EXPORT_CREATED: &str = "export_created";
pub const STATUS_DELETED: &str = "deleted";
pub const STATUS_DELETED_ALL: &str = "deleted_all";
pub const STATUS_ERROR: &str = "error";

pub const CODE_INVALID_REQUEST: &str = "invalid_request";

/// Status parameters a redirect leaves on the page URL
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
    pub code: Option<String>,
    pub download_url: Option<String>,
    pub count: Option<String>,
}

impl StatusQuery {
    /// Notices for the page; a download link is only rendered when it points
    /// at this server's download action under `public_url`
    pub fn notices(&self, public_url: &str) -> Vec<Notice> {
        let Some(status) = self.status.as_deref() else {
            return Vec::new();
        };

        let notice = match status {
            STATUS_EXPORT_CREATED => {
                let download_prefix = format!("{public_url}{DOWNLOAD_ACTION_PATH}?");
                let link = self
                    .download_url
                    .as_deref()
                    .filter(|url| url.starts_with(&download_prefix))
                    .map(|url| format!(r#" <a href="{}">Download Export</a>"#, escape(url)))
                    .unwrap_or_default();
                Notice::success(format!("Export file created successfully!{link}"))
            }
            STATUS_DELETED => Notice::success("Export file deleted successfully."),
            STATUS_DELETED_ALL => {
                let count = self
                    .count
                    .as_deref()
                    .and_then(|c| c.parse::<usize>().ok())
                    .unwrap_or(0);
                Notice::success(format!("Deleted {count} export file(s)."))
            }
            STATUS_ERROR => Notice::error(error_message(self.code.as_deref())),
            _ => return Vec::new(),
        };

        vec![notice]
    }
}

fn error_message(code: Option<&str>) -> &'static str {
    match code {
        Some(CODE_INVALID_REQUEST) => {
            "The request was invalid or its security token has expired. Reload the page and try again."
        }
        Some("not_found") => "The requested export file was not found.",
        Some("io_failure") => "The export operation failed. Check the server logs for details.",
        _ => "The operation failed.",
    }
}

/// 303 back to `path` with the given query parameters
pub fn redirect_with(path: &str, params: &[(&str, &str)]) -> Redirect {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        query.append_pair(name, value);
    }
    Redirect::to(&format!("{path}?{}", query.finish()))
}

pub fn redirect_error(path: &str, code: &str) -> Redirect {
    redirect_with(path, &[("status", STATUS_ERROR), ("code", code)])
}
