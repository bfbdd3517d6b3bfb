use axum::{
    debug_handler,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{AppError, AppResult, db, session};

#[debug_handler]
pub(crate) async fn toggle(
    Path(id): Path<Uuid>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let id = id.to_string();
    let user_id = session::require_user(&session, &format!("/u/{id}")).await?;

    if user_id == id {
        return Err(AppError::PermissionDenied("you are already your own friend"));
    }
    if db::users::find(&db_pool, &id).await?.is_none() {
        return Err(AppError::NotFound("profile"));
    }

    db::friends::toggle(&db_pool, &user_id, &id).await?;

    Ok(Redirect::to(&format!("/u/{id}")).into_response())
}
