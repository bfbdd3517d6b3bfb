use sqlx::SqlitePool;

use crate::AppResult;

/// Same conditional shape as the like toggle; the edge is directed from
/// `user_id` to `friend_id`. Returns whether the edge exists afterwards.
pub async fn toggle(pool: &SqlitePool, user_id: &str, friend_id: &str) -> AppResult<bool> {
    let inserted = sqlx::query(
        "INSERT INTO friends (user_id,friend_id) VALUES (?,?) \
         ON CONFLICT (user_id,friend_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(friend_id)
    .execute(pool)
    .await?
    .rows_affected();

    if inserted == 0 {
        sqlx::query("DELETE FROM friends WHERE user_id=? AND friend_id=?")
            .bind(user_id)
            .bind(friend_id)
            .execute(pool)
            .await?;
        return Ok(false);
    }

    Ok(true)
}

pub async fn exists(pool: &SqlitePool, user_id: &str, friend_id: &str) -> AppResult<bool> {
    let row: Option<(i64,)> =
        sqlx::query_as("SELECT 1 FROM friends WHERE user_id=? AND friend_id=?")
            .bind(user_id)
            .bind(friend_id)
            .fetch_optional(pool)
            .await?;

    Ok(row.is_some())
}
