use axum::{
    debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{AppError, AppResult, db, include_res, posts, res, session};

const PROFILE_POSTS: i64 = 10;

#[debug_handler]
pub(crate) async fn profile(
    Path(id): Path<Uuid>,
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let id = id.to_string();

    let user = db::users::find(&db_pool, &id)
        .await?
        .ok_or(AppError::NotFound("profile"))?;

    let mut items = String::new();
    for post in db::posts::by_author(&db_pool, &id, PROFILE_POSTS).await? {
        items += &posts::post_item(&post, "like");
    }

    let friend_action = match session::current_user(&session).await? {
        Some(viewer_id) if viewer_id != id => {
            let label = if db::friends::exists(&db_pool, &viewer_id, &id).await? {
                "unfriend"
            } else {
                "add friend"
            };
            format!("<a href=\"/u/{id}/friend\">{label}</a>")
        }
        Some(_) => String::new(),
        None => format!("<a href=\"/login?return_url=/u/{id}\">log in to add friends</a>"),
    };

    Ok(Html(
        include_res!(str, "/pages/profile.html")
            .replace("{friend_action}", &friend_action)
            .replace("{posts}", &items)
            .replace("{alias}", &res::escape(&user.alias))
            .replace("{handle}", &res::escape(&user.handle)),
    )
    .into_response())
}
