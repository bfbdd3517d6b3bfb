use axum::{
    debug_handler,
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{AppError, AppResult, db, session};

/// Anonymous visitors get the redirect and nothing else; for everyone else
/// the edge is flipped in a single conditional statement.
#[debug_handler]
pub(crate) async fn toggle(
    Path(id): Path<Uuid>,
    State(db_pool): State<SqlitePool>,
    session: Session,
    headers: HeaderMap,
) -> AppResult<Redirect> {
    let back = session::back_path(
        headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok()),
    );

    let Some(user_id) = session::current_user(&session).await? else {
        return Ok(Redirect::to(&back));
    };

    let id = id.to_string();
    if db::posts::find(&db_pool, &id).await?.is_none() {
        return Err(AppError::NotFound("post"));
    }

    db::likes::toggle(&db_pool, &id, &user_id).await?;

    Ok(Redirect::to(&back))
}
