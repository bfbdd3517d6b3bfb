use tower_sessions::Session;

use crate::{AppError, AppResult};

pub const USER_ID: &str = "user_id";
pub const RETURN_URL: &str = "return_url";
pub const CSRF_STATE: &str = "csrf_state";
pub const PKCE_VERIFIER: &str = "pkce_verifier";

pub async fn current_user(session: &Session) -> AppResult<Option<String>> {
    Ok(session.get::<String>(USER_ID).await?)
}

/// Resolves the logged-in user or bounces to `/login`, coming back to `return_url`.
pub async fn require_user(session: &Session, return_url: &str) -> AppResult<String> {
    current_user(session)
        .await?
        .ok_or_else(|| AppError::AuthenticationRequired {
            return_url: return_url.to_owned(),
        })
}

/// Accepts only same-site absolute paths; everything else becomes `/`.
pub fn safe_path(candidate: Option<&str>) -> String {
    match candidate {
        Some(p) if p.starts_with('/') && !p.starts_with("//") && !p.contains('\\') => p.to_owned(),
        _ => "/".to_owned(),
    }
}

/// Reduces a Referer value to its path-and-query so redirects stay on this site.
pub fn back_path(referer: Option<&str>) -> String {
    let path = referer.and_then(|raw| {
        if raw.starts_with('/') {
            return Some(raw);
        }
        let rest = raw
            .strip_prefix("https://")
            .or_else(|| raw.strip_prefix("http://"))?;
        rest.find('/').map(|i| &rest[i..])
    });
    safe_path(path)
}
