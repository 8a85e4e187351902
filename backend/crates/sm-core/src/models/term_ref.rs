use serde::{Deserialize, Serialize};

/// Taxonomy term attached to a post (category or tag)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRef {
    pub slug: String,
}

impl TermRef {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}
