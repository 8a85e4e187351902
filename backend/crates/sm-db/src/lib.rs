pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::media_repository::MediaRepository;
pub use repositories::option_repository::OptionRepository;
pub use repositories::post_repository::PostRepository;
pub use repositories::term_repository::TermRepository;
pub use repositories::user_repository::UserRepository;

use sqlx::SqlitePool;

/// Apply the bundled content schema migrations
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
