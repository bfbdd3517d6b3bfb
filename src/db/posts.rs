use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{AppError, AppResult};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub published_at: i64,
}

/// A post decorated for list pages: author names and the derived like-count.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostPreview {
    pub id: String,
    pub author_id: String,
    pub author_handle: String,
    pub author_alias: String,
    pub content: String,
    pub published_at: i64,
    pub like_count: i64,
}

const PREVIEW_COLUMNS: &str = "p.id, p.author_id, u.handle AS author_handle, \
     u.alias AS author_alias, p.content, p.published_at, \
     (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count";

pub async fn create(pool: &SqlitePool, author_id: &str, content: &str) -> AppResult<Post> {
    let post = sqlx::query_as::<_, Post>(
        "INSERT INTO posts (id,author_id,content,published_at) VALUES (?,?,?,?) \
         RETURNING id,author_id,content,published_at",
    )
    .bind(Uuid::now_v7().to_string())
    .bind(author_id)
    .bind(content)
    .bind(super::now_unix())
    .fetch_one(pool)
    .await?;

    Ok(post)
}

pub async fn find(pool: &SqlitePool, id: &str) -> AppResult<Option<Post>> {
    let post = sqlx::query_as::<_, Post>(
        "SELECT id,author_id,content,published_at FROM posts WHERE id=?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

pub async fn preview(pool: &SqlitePool, id: &str) -> AppResult<Option<PostPreview>> {
    let post = sqlx::query_as::<_, PostPreview>(&format!(
        "SELECT {PREVIEW_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id WHERE p.id=?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// The landing query: posts ranked by derived like-count, recency breaking ties.
pub async fn top(pool: &SqlitePool, limit: i64) -> AppResult<Vec<PostPreview>> {
    let posts = sqlx::query_as::<_, PostPreview>(&format!(
        "SELECT {PREVIEW_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id \
         ORDER BY like_count DESC, p.published_at DESC, p.id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Most recent posts authored by anyone the requester has friended.
pub async fn friends_feed(pool: &SqlitePool, user_id: &str, limit: i64) -> AppResult<Vec<PostPreview>> {
    let posts = sqlx::query_as::<_, PostPreview>(&format!(
        "SELECT {PREVIEW_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id \
         WHERE p.author_id IN (SELECT friend_id FROM friends WHERE user_id=?) \
         ORDER BY p.published_at DESC, p.id DESC LIMIT ?"
    ))
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

pub async fn by_author(pool: &SqlitePool, author_id: &str, limit: i64) -> AppResult<Vec<PostPreview>> {
    let posts = sqlx::query_as::<_, PostPreview>(&format!(
        "SELECT {PREVIEW_COLUMNS} FROM posts p JOIN users u ON u.id = p.author_id \
         WHERE p.author_id=? ORDER BY p.published_at DESC, p.id DESC LIMIT ?"
    ))
    .bind(author_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Author-only edit. The ownership check runs before any mutation and
/// surfaces as a typed error, never a blind UPDATE.
pub async fn update(pool: &SqlitePool, id: &str, editor_id: &str, content: &str) -> AppResult<()> {
    authorize(pool, id, editor_id).await?;

    sqlx::query("UPDATE posts SET content=? WHERE id=?")
        .bind(content)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Author-only delete; comments and likes go with the post via FK cascade.
pub async fn delete(pool: &SqlitePool, id: &str, requester_id: &str) -> AppResult<()> {
    authorize(pool, id, requester_id).await?;

    sqlx::query("DELETE FROM posts WHERE id=?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

async fn authorize(pool: &SqlitePool, id: &str, user_id: &str) -> AppResult<()> {
    let (author_id,): (String,) = sqlx::query_as("SELECT author_id FROM posts WHERE id=?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("post"))?;

    if author_id != user_id {
        return Err(AppError::PermissionDenied("only the author may do that"));
    }

    Ok(())
}
