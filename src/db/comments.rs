use sqlx::SqlitePool;
use uuid::Uuid;

use crate::AppResult;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub published_at: i64,
}

/// A comment joined with its author, as list pages show it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentView {
    pub id: String,
    pub author_id: String,
    pub author_handle: String,
    pub author_alias: String,
    pub content: String,
    pub published_at: i64,
}

pub async fn create(
    pool: &SqlitePool,
    post_id: &str,
    author_id: &str,
    content: &str,
) -> AppResult<Comment> {
    let comment = sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (id,post_id,author_id,content,published_at) VALUES (?,?,?,?,?) \
         RETURNING id,post_id,author_id,content,published_at",
    )
    .bind(Uuid::now_v7().to_string())
    .bind(post_id)
    .bind(author_id)
    .bind(content)
    .bind(super::now_unix())
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

pub async fn latest_for_post(
    pool: &SqlitePool,
    post_id: &str,
    limit: i64,
) -> AppResult<Vec<CommentView>> {
    let comments = sqlx::query_as::<_, CommentView>(
        "SELECT c.id, c.author_id, u.handle AS author_handle, u.alias AS author_alias, \
                c.content, c.published_at \
         FROM comments c JOIN users u ON u.id = c.author_id \
         WHERE c.post_id=? ORDER BY c.published_at DESC, c.id DESC LIMIT ?",
    )
    .bind(post_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

pub async fn count_for_post(pool: &SqlitePool, post_id: &str) -> AppResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE post_id=?")
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
