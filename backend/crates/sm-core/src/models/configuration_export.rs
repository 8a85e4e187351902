use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Site options carried by configuration exports. Anything else stays behind.
pub const ESSENTIAL_OPTIONS: [&str; 13] = [
    "blogname",
    "blogdescription",
    "siteurl",
    "home",
    "users_can_register",
    "default_role",
    "permalink_structure",
    "category_base",
    "tag_base",
    "thumbnail_size_w",
    "thumbnail_size_h",
    "medium_size_w",
    "medium_size_h",
];

/// The `configuration` section of an export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationExport {
    /// Allow-listed options that have a stored value
    pub options: BTreeMap<String, Value>,
    /// Active theme identifier to its customizations
    pub themes: BTreeMap<String, Value>,
    pub database_version: Option<String>,
    pub platform_version: String,
}
