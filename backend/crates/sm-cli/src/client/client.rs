use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method, header::AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;

const API_PREFIX: &str = "/api/migration/v1";
const NONCE_HEADER: &str = "X-Migration-Nonce";
const CREATE_EXPORT_ACTION: &str = "create_export";

/// HTTP client for the sm-server migration API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    /// * `token` - Optional JWT sent as a bearer credential
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        req
    }

    /// Send the request and unwrap the `{error: {code, message}}` envelope on failure
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
            let (code, message) = match body.get("error") {
                Some(error) => (
                    error
                        .get("code")
                        .and_then(|v| v.as_str())
                        .unwrap_or("UNKNOWN")
                        .to_string(),
                    error
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or("Unknown error")
                        .to_string(),
                ),
                None => (
                    format!("HTTP_{}", status.as_u16()),
                    status
                        .canonical_reason()
                        .unwrap_or("Unexpected response")
                        .to_string(),
                ),
            };
            return Err(ClientError::api_error(code, message));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch a single-use token for `action`
    pub async fn issue_nonce(&self, action: &str) -> CliClientResult<String> {
        let req = self.request(Method::GET, &format!("/nonce/{}", action));
        let body = self.execute(req).await?;

        body.get("token")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| ClientError::api_error("INVALID_RESPONSE", "Nonce response had no token"))
    }

    /// Create an export file; the server defaults the type to `full`
    pub async fn create_export(&self, export_type: Option<&str>) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
            export_type: Option<&'a str>,
        }

        let nonce = self.issue_nonce(CREATE_EXPORT_ACTION).await?;
        let req = self
            .request(Method::POST, "/export/persistent")
            .header(NONCE_HEADER, nonce)
            .json(&CreateRequest { export_type });
        self.execute(req).await
    }

    pub async fn list_exports(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/exports/list");
        self.execute(req).await
    }

    pub async fn get_export(&self, file_name: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/export/{}", file_name));
        self.execute(req).await
    }
}
