use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{AppResult, db, include_res, session};

const PAGE_SIZE: i64 = 10;

/// Landing page: the ten most-liked posts.
#[debug_handler]
pub async fn top(State(db_pool): State<SqlitePool>, session: Session) -> AppResult<Response> {
    let posts = db::posts::top(&db_pool, PAGE_SIZE).await?;

    render_list("Top posts", &posts, &session).await
}

/// Ten most recent posts by the requester's friends; empty for anonymous
/// visitors.
#[debug_handler]
pub async fn feed(State(db_pool): State<SqlitePool>, session: Session) -> AppResult<Response> {
    let posts = match session::current_user(&session).await? {
        Some(user_id) => db::posts::friends_feed(&db_pool, &user_id, PAGE_SIZE).await?,
        None => Vec::new(),
    };

    render_list("Your feed", &posts, &session).await
}

async fn render_list(
    heading: &str,
    posts: &[db::posts::PostPreview],
    session: &Session,
) -> AppResult<Response> {
    let mut items = String::new();
    for post in posts {
        items += &super::post_item(post, "like");
    }
    if items.is_empty() {
        items = "<p>Nothing here yet. <a href=\"/login\">Log in</a> and friend some people, \
                 or <a href=\"/p/new\">write the first post</a>.</p>"
            .to_owned();
    }

    Ok(Html(
        include_res!(str, "/pages/index.html")
            .replace("{heading}", heading)
            .replace("{nav}", &nav(session).await?)
            .replace("{posts}", &items),
    )
    .into_response())
}

pub(crate) async fn nav(session: &Session) -> AppResult<String> {
    Ok(if let Some(user_id) = session::current_user(session).await? {
        include_res!(str, "/pages/nav_user.html").replace("{user_id}", &user_id)
    } else {
        include_res!(str, "/pages/nav_anon.html").to_owned()
    })
}
