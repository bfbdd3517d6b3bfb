mod friend;
mod page;

use axum::{Router, routing::get};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(page::profile))
        .route("/{id}/friend", get(friend::toggle))
}
