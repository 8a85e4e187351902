use crate::{MediaRecord, PostRecord, UserRecord};

use serde::{Deserialize, Serialize};

/// The `wordpress` section of an export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub posts: Vec<PostRecord>,
    pub users: Vec<UserRecord>,
    pub media: Vec<MediaRecord>,
    pub total_posts: usize,
    pub total_users: usize,
    pub total_media: usize,
}

impl SiteContent {
    /// Build the section, deriving the count fields from the collections
    pub fn new(posts: Vec<PostRecord>, users: Vec<UserRecord>, media: Vec<MediaRecord>) -> Self {
        Self {
            total_posts: posts.len(),
            total_users: users.len(),
            total_media: media.len(),
            posts,
            users,
            media,
        }
    }
}
