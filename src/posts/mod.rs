pub mod index;

mod delete;
mod detail;
mod edit;
mod form;
mod like;
mod new;

use axum::{Router, routing::get};

use crate::{AppState, db::posts::PostPreview, include_res, res};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", get(new::page).post(new::submit))
        .route("/{id}", get(detail::page).post(detail::comment))
        .route("/{id}/edit", get(edit::page).post(edit::submit))
        .route("/{id}/delete", get(delete::confirm).post(delete::submit))
        .route("/{id}/deleted", get(delete::done))
        .route("/{id}/like", get(like::toggle))
}

/// One list entry; shared by the landing page, the feed, post detail and
/// profile pages.
pub(crate) fn post_item(post: &PostPreview, like_label: &str) -> String {
    include_res!(str, "/pages/post_item.html")
        .replace("{like_label}", like_label)
        .replace("{id}", &post.id)
        .replace("{author_id}", &post.author_id)
        .replace("{author_alias}", &res::escape(&post.author_alias))
        .replace("{author_handle}", &res::escape(&post.author_handle))
        .replace("{published}", &res::published(post.published_at))
        .replace("{like_count}", &post.like_count.to_string())
        .replace("{content}", &res::markdown(&post.content))
}
