use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Exported user identity with roles and raw metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    pub user_login: String,
    pub user_email: String,
    pub display_name: String,
    pub roles: Vec<String>,
    /// Meta key to every value stored under it
    pub meta: BTreeMap<String, Vec<String>>,
}
