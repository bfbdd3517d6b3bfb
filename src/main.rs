use std::str::FromStr;

use grapevine::{AppState, auth, config::Config};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grapevine=debug,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect_with(
            SqliteConnectOptions::from_str(&config.database_url)?
                .create_if_missing(true)
                .foreign_keys(true),
        )
        .await?;
    sqlx::migrate!().run(&db_pool).await?;

    let clients = auth::Clients::from_json(serde_json::Value::from_str(include_str!(
        "../client_secret.json"
    ))?)?;

    let app = grapevine::app(AppState { db_pool, clients }, config.session_minutes);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
