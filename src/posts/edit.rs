use axum::{
    Form, debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;
use validator::Validate;

use crate::{AppError, AppResult, db, include_res, res, session};

use super::form::{self, PostForm};

#[debug_handler]
pub(crate) async fn page(
    Path(id): Path<Uuid>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let id = id.to_string();
    let user_id = session::require_user(&session, &format!("/p/{id}/edit")).await?;

    let post = db::posts::find(&db_pool, &id)
        .await?
        .ok_or(AppError::NotFound("post"))?;
    if post.author_id != user_id {
        return Err(AppError::PermissionDenied("only the author may edit a post"));
    }

    Ok(render(&id, "", &post.content).into_response())
}

#[debug_handler]
pub(crate) async fn submit(
    Path(id): Path<Uuid>,
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(post): Form<PostForm>,
) -> AppResult<Response> {
    let id = id.to_string();
    let user_id = session::require_user(&session, &format!("/p/{id}/edit")).await?;

    if let Err(errors) = post.validate() {
        return Ok(render(&id, &form::error_list(&errors), &post.content).into_response());
    }

    db::posts::update(&db_pool, &id, &user_id, &post.content).await?;

    Ok(Redirect::to(&format!("/p/{id}")).into_response())
}

fn render(id: &str, errors: &str, content: &str) -> Html<String> {
    Html(
        include_res!(str, "/pages/post_edit.html")
            .replace("{id}", id)
            .replace("{errors}", errors)
            .replace("{content}", &res::escape(content)),
    )
}
