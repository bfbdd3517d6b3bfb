use sqlx::SqlitePool;

use crate::AppResult;

/// Flips the like edge in one conditional pass: the insert is a no-op when
/// the edge already exists (primary key), and only then does the delete run.
/// Returns whether the edge exists afterwards.
pub async fn toggle(pool: &SqlitePool, post_id: &str, user_id: &str) -> AppResult<bool> {
    let inserted = sqlx::query(
        "INSERT INTO likes (post_id,user_id) VALUES (?,?) \
         ON CONFLICT (post_id,user_id) DO NOTHING",
    )
    .bind(post_id)
    .bind(user_id)
    .execute(pool)
    .await?
    .rows_affected();

    if inserted == 0 {
        sqlx::query("DELETE FROM likes WHERE post_id=? AND user_id=?")
            .bind(post_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        return Ok(false);
    }

    Ok(true)
}

/// The like-membership read: does this user currently like this post?
pub async fn exists(pool: &SqlitePool, post_id: &str, user_id: &str) -> AppResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM likes WHERE post_id=? AND user_id=?")
        .bind(post_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub async fn count(pool: &SqlitePool, post_id: &str) -> AppResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM likes WHERE post_id=?")
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
