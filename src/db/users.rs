use sqlx::SqlitePool;
use uuid::Uuid;

use crate::AppResult;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub provider: String,
    pub provider_uid: String,
    pub handle: String,
    pub alias: String,
    pub created_at: i64,
}

pub async fn create(
    pool: &SqlitePool,
    provider: &str,
    provider_uid: &str,
    alias: &str,
) -> AppResult<User> {
    let uuid = Uuid::now_v7();
    let handle = "user".to_owned() + &uuid.simple().to_string();

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id,provider,provider_uid,handle,alias,created_at) \
         VALUES (?,?,?,?,?,?) \
         RETURNING id,provider,provider_uid,handle,alias,created_at",
    )
    .bind(uuid.to_string())
    .bind(provider)
    .bind(provider_uid)
    .bind(&handle)
    .bind(alias)
    .bind(super::now_unix())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn find(pool: &SqlitePool, id: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id,provider,provider_uid,handle,alias,created_at FROM users WHERE id=?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_provider(
    pool: &SqlitePool,
    provider: &str,
    provider_uid: &str,
) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id,provider,provider_uid,handle,alias,created_at \
         FROM users WHERE provider=? AND provider_uid=?",
    )
    .bind(provider)
    .bind(provider_uid)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
