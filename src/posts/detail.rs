use axum::{
    Form, debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;
use validator::Validate;

use crate::{AppError, AppResult, db, include_res, res, session};

use super::form::{self, CommentForm};

const COMMENT_PAGE: i64 = 5;

#[debug_handler]
pub(crate) async fn page(
    Path(id): Path<Uuid>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    render(&db_pool, &session, &id.to_string(), "").await
}

/// Comment submission re-renders the same page with the new comment in
/// place; a reload will resubmit, which matches the behavior this replaces.
#[debug_handler]
pub(crate) async fn comment(
    Path(id): Path<Uuid>,
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(comment): Form<CommentForm>,
) -> AppResult<Response> {
    let id = id.to_string();
    let user_id = session::require_user(&session, &format!("/p/{id}")).await?;

    if db::posts::find(&db_pool, &id).await?.is_none() {
        return Err(AppError::NotFound("post"));
    }

    if let Err(errors) = comment.validate() {
        return render(&db_pool, &session, &id, &form::error_list(&errors)).await;
    }

    db::comments::create(&db_pool, &id, &user_id, &comment.content).await?;

    render(&db_pool, &session, &id, "").await
}

async fn render(
    db_pool: &SqlitePool,
    session: &Session,
    id: &str,
    comment_errors: &str,
) -> AppResult<Response> {
    let Some(post) = db::posts::preview(db_pool, id).await? else {
        return Err(AppError::NotFound("post"));
    };

    let like_label = match session::current_user(session).await? {
        Some(user_id) if db::likes::exists(db_pool, id, &user_id).await? => "unlike",
        _ => "like",
    };

    let mut comments = String::new();
    for c in db::comments::latest_for_post(db_pool, id, COMMENT_PAGE).await? {
        comments += &include_res!(str, "/pages/comment_item.html")
            .replace("{author_id}", &c.author_id)
            .replace("{author_alias}", &res::escape(&c.author_alias))
            .replace("{author_handle}", &res::escape(&c.author_handle))
            .replace("{published}", &res::published(c.published_at))
            .replace("{content}", &res::markdown(&c.content));
    }

    // structure slots first so user content can't smuggle a placeholder in
    Ok(Html(
        include_res!(str, "/pages/post_detail.html")
            .replace("{nav}", &super::index::nav(session).await?)
            .replace("{id}", id)
            .replace("{comment_errors}", comment_errors)
            .replace("{post}", &super::post_item(&post, like_label))
            .replace("{comments}", &comments),
    )
    .into_response())
}
