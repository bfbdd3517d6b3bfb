use axum::{
    debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{AppError, AppResult, db, include_res, res, session};

#[debug_handler]
pub(crate) async fn confirm(
    Path(id): Path<Uuid>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let id = id.to_string();
    let user_id = session::require_user(&session, &format!("/p/{id}/delete")).await?;

    let post = db::posts::find(&db_pool, &id)
        .await?
        .ok_or(AppError::NotFound("post"))?;
    if post.author_id != user_id {
        return Err(AppError::PermissionDenied("only the author may delete a post"));
    }

    Ok(Html(
        include_res!(str, "/pages/post_delete.html")
            .replace("{id}", &id)
            .replace("{content}", &res::escape(&post.content)),
    )
    .into_response())
}

#[debug_handler]
pub(crate) async fn submit(
    Path(id): Path<Uuid>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let id = id.to_string();
    let user_id = session::require_user(&session, &format!("/p/{id}/delete")).await?;

    db::posts::delete(&db_pool, &id, &user_id).await?;

    Ok(Redirect::to(&format!("/p/{id}/deleted")).into_response())
}

/// Keyed by the former id so the redirect target survives the row itself.
#[debug_handler]
pub(crate) async fn done(Path(id): Path<Uuid>) -> Response {
    Html(include_res!(str, "/pages/post_deleted.html").replace("{id}", &id.to_string()))
        .into_response()
}
