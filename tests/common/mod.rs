#![allow(dead_code)]

use std::str::FromStr;

use grapevine::{AppState, auth, db};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use uuid::Uuid;

/// One-connection in-memory database with the schema applied. A single
/// connection keeps every query on the same `:memory:` instance.
pub async fn pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::from_str("sqlite::memory:")
                .unwrap()
                .foreign_keys(true),
        )
        .await
        .unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();
    pool
}

pub fn state(pool: SqlitePool) -> AppState {
    AppState {
        db_pool: pool,
        clients: auth::Clients::from_json(serde_json::json!({})).unwrap(),
    }
}

pub async fn user(pool: &SqlitePool, alias: &str) -> db::users::User {
    db::users::create(pool, "test", &Uuid::now_v7().to_string(), alias)
        .await
        .unwrap()
}

/// Pins a post's publish time so ordering assertions don't race the clock.
pub async fn backdate(pool: &SqlitePool, post_id: &str, published_at: i64) {
    sqlx::query("UPDATE posts SET published_at=? WHERE id=?")
        .bind(published_at)
        .bind(post_id)
        .execute(pool)
        .await
        .unwrap();
}
