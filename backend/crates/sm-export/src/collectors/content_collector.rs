use crate::Result as ExportErrorResult;

use sm_core::{PostRecord, SiteContent, TermRef, UserRecord};
use sm_db::repositories::post_repository::{ATTACHED_FILE_META_KEY, THUMBNAIL_META_KEY};
use sm_db::repositories::term_repository::EXPORTED_TAXONOMIES;
use sm_db::repositories::user_repository::EXPORT_USER_LIMIT;
use sm_db::{MediaRepository, PostRepository, TermRepository, UserRepository};

use log::debug;
use sqlx::SqlitePool;

/// Gathers the `wordpress` section: posts, users and media. Read-only.
pub struct ContentCollector {
    posts: PostRepository,
    terms: TermRepository,
    users: UserRepository,
    media: MediaRepository,
    uploads_url: Option<String>,
}

impl ContentCollector {
    pub fn new(pool: SqlitePool, uploads_url: Option<String>) -> Self {
        Self {
            posts: PostRepository::new(pool.clone()),
            terms: TermRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            media: MediaRepository::new(pool),
            uploads_url: uploads_url.map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    pub async fn collect(&self) -> ExportErrorResult<SiteContent> {
        let posts = self.collect_posts().await?;
        let users = self.collect_users().await?;
        let media = self.media.find_all().await?;

        debug!(
            "Collected {} posts, {} users, {} media items",
            posts.len(),
            users.len(),
            media.len()
        );

        Ok(SiteContent::new(posts, users, media))
    }

    async fn collect_posts(&self) -> ExportErrorResult<Vec<PostRecord>> {
        let mut posts = self.posts.find_exportable().await?;

        for post in &mut posts {
            post.terms = self
                .terms
                .find_slugs_for_object(post.id, &EXPORTED_TAXONOMIES)
                .await?
                .into_iter()
                .map(TermRef::new)
                .collect();
            post.featured_image = self.featured_image(post.id).await?;
        }

        Ok(posts)
    }

    async fn collect_users(&self) -> ExportErrorResult<Vec<UserRecord>> {
        let mut users = self.users.find_first(EXPORT_USER_LIMIT).await?;

        for user in &mut users {
            user.roles = self.users.find_roles(user.id).await?;
            user.meta = self.users.find_meta(user.id).await?;
        }

        Ok(users)
    }

    /// URL of a post's thumbnail. A missing, non-numeric or dangling
    /// thumbnail reference yields `None`.
    async fn featured_image(&self, post_id: i64) -> ExportErrorResult<Option<String>> {
        let Some(raw_id) = self
            .posts
            .find_meta_value(post_id, THUMBNAIL_META_KEY)
            .await?
        else {
            return Ok(None);
        };

        let attachment_id = match raw_id.trim().parse::<i64>() {
            Ok(id) if id > 0 => id,
            _ => return Ok(None),
        };

        let Some(guid) = self.posts.find_attachment_guid(attachment_id).await? else {
            return Ok(None);
        };

        if let Some(base) = &self.uploads_url
            && let Some(file) = self
                .posts
                .find_meta_value(attachment_id, ATTACHED_FILE_META_KEY)
                .await?
            && !file.trim().is_empty()
        {
            return Ok(Some(format!("{}/{}", base, file.trim_start_matches('/'))));
        }

        Ok(Some(guid).filter(|g| !g.is_empty()))
    }
}
