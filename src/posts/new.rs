use axum::{
    Form, debug_handler,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use validator::Validate;

use crate::{AppResult, db, include_res, session};

use super::form::{self, PostForm};

#[debug_handler]
pub(crate) async fn page(session: Session) -> AppResult<Response> {
    session::require_user(&session, "/p/new").await?;

    Ok(render("", "").into_response())
}

#[debug_handler]
pub(crate) async fn submit(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(post): Form<PostForm>,
) -> AppResult<Response> {
    let user_id = session::require_user(&session, "/p/new").await?;

    if let Err(errors) = post.validate() {
        return Ok(render(&form::error_list(&errors), &post.content).into_response());
    }

    let post = db::posts::create(&db_pool, &user_id, &post.content).await?;

    Ok(Redirect::to(&format!("/p/{}", post.id)).into_response())
}

fn render(errors: &str, content: &str) -> Html<String> {
    Html(
        include_res!(str, "/pages/post_new.html")
            .replace("{errors}", errors)
            .replace("{content}", &crate::res::escape(content)),
    )
}
