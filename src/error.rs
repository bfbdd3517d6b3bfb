use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::{include_res, res};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no such {0}")]
    NotFound(&'static str),

    #[error("login required")]
    AuthenticationRequired { return_url: String },

    #[error("{0}")]
    PermissionDenied(&'static str),

    #[error(transparent)]
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => res::sorry(what),
            AppError::AuthenticationRequired { return_url } => {
                Redirect::to(&format!("/login?return_url={return_url}")).into_response()
            }
            AppError::PermissionDenied(why) => (
                StatusCode::FORBIDDEN,
                Html(include_res!(str, "/pages/forbidden.html").replace("{why}", why)),
            )
                .into_response(),
            AppError::Internal(err) => {
                tracing::error!("internal error: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{err}")).into_response()
            }
        }
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        Self::Internal(anyhow::Error::msg(err))
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        Self::Internal(anyhow::Error::msg(err.to_owned()))
    }
}

macro_rules! internal_impl {
    ($E:ty) => {
        impl From<$E> for AppError {
            fn from(err: $E) -> Self {
                Self::Internal(anyhow::Error::from(err))
            }
        }
    };
}

internal_impl!(serde_json::Error);
internal_impl!(sqlx::Error);
internal_impl!(sqlx::migrate::MigrateError);
internal_impl!(tower_sessions::session::Error);
internal_impl!(axum::Error);
internal_impl!(reqwest::Error);
internal_impl!(std::io::Error);

impl<E: core::error::Error + Send + Sync + 'static, R: oauth2::ErrorResponse + Send + Sync + 'static> From<oauth2::RequestTokenError<E, R>> for AppError {
    fn from(err: oauth2::RequestTokenError<E, R>) -> Self {
        Self::Internal(anyhow::Error::from(err))
    }
}
