use sqlx::SqlitePool;

/// Inserts a post row and returns its ID
pub async fn insert_post(pool: &SqlitePool, title: &str, post_type: &str, status: &str) -> i64 {
    let slug = title.to_lowercase().replace(' ', "-");

    sqlx::query(
        r#"
            INSERT INTO posts (post_title, post_name, post_type, post_status, post_content,
                post_date, post_date_gmt, guid, post_author)
            VALUES (?, ?, ?, ?, ?, '2024-01-01 10:00:00', '2024-01-01 09:00:00', ?, 1)
        "#,
    )
    .bind(title)
    .bind(&slug)
    .bind(post_type)
    .bind(status)
    .bind(format!("Body of {title}"))
    .bind(format!("https://example.test/?p={slug}"))
    .execute(pool)
    .await
    .expect("Failed to insert post")
    .last_insert_rowid()
}

/// Inserts an attachment and returns its ID
pub async fn insert_attachment(pool: &SqlitePool, title: &str, guid: &str, parent: i64) -> i64 {
    sqlx::query(
        r#"
            INSERT INTO posts (post_title, post_type, post_status, post_mime_type, guid, post_parent)
            VALUES (?, 'attachment', 'inherit', 'image/jpeg', ?, ?)
        "#,
    )
    .bind(title)
    .bind(guid)
    .bind(parent)
    .execute(pool)
    .await
    .expect("Failed to insert attachment")
    .last_insert_rowid()
}

pub async fn insert_post_meta(pool: &SqlitePool, post_id: i64, key: &str, value: &str) {
    sqlx::query("INSERT INTO postmeta (post_id, meta_key, meta_value) VALUES (?, ?, ?)")
        .bind(post_id)
        .bind(key)
        .bind(value)
        .execute(pool)
        .await
        .expect("Failed to insert post meta");
}

/// Creates a term in a taxonomy and attaches it to an object
pub async fn attach_term(pool: &SqlitePool, object_id: i64, taxonomy: &str, slug: &str) {
    let term_id = sqlx::query("INSERT INTO terms (name, slug) VALUES (?, ?)")
        .bind(slug)
        .bind(slug)
        .execute(pool)
        .await
        .expect("Failed to insert term")
        .last_insert_rowid();

    let term_taxonomy_id =
        sqlx::query("INSERT INTO term_taxonomy (term_id, taxonomy) VALUES (?, ?)")
            .bind(term_id)
            .bind(taxonomy)
            .execute(pool)
            .await
            .expect("Failed to insert term taxonomy")
            .last_insert_rowid();

    sqlx::query("INSERT INTO term_relationships (object_id, term_taxonomy_id) VALUES (?, ?)")
        .bind(object_id)
        .bind(term_taxonomy_id)
        .execute(pool)
        .await
        .expect("Failed to insert term relationship");
}

/// Inserts a user and returns its ID
pub async fn insert_user(pool: &SqlitePool, login: &str) -> i64 {
    sqlx::query("INSERT INTO users (user_login, user_email, display_name) VALUES (?, ?, ?)")
        .bind(login)
        .bind(format!("{login}@example.test"))
        .bind(format!("User {login}"))
        .execute(pool)
        .await
        .expect("Failed to insert user")
        .last_insert_rowid()
}

pub async fn insert_user_meta(pool: &SqlitePool, user_id: i64, key: &str, value: Option<&str>) {
    sqlx::query("INSERT INTO usermeta (user_id, meta_key, meta_value) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(key)
        .bind(value)
        .execute(pool)
        .await
        .expect("Failed to insert user meta");
}

pub async fn insert_user_role(pool: &SqlitePool, user_id: i64, role: &str) {
    sqlx::query("INSERT INTO user_roles (user_id, role) VALUES (?, ?)")
        .bind(user_id)
        .bind(role)
        .execute(pool)
        .await
        .expect("Failed to insert user role");
}

pub async fn insert_option(pool: &SqlitePool, name: &str, value: &str) {
    sqlx::query("INSERT INTO options (option_name, option_value) VALUES (?, ?)")
        .bind(name)
        .bind(value)
        .execute(pool)
        .await
        .expect("Failed to insert option");
}
