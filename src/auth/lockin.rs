use axum::{
    debug_handler,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use oauth2::{AuthorizationCode, CsrfToken, PkceCodeVerifier, TokenResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    AppResult, AppState, db,
    session::{self, CSRF_STATE, PKCE_VERIFIER, RETURN_URL, USER_ID},
};

use super::{Clients, clients::ClientProvider};

#[derive(Deserialize)]
pub struct LockinQuery {
    pub state: Option<String>,
    pub code: Option<String>,
}

/// The OAuth return leg: verify state, trade the code for a token, ask the
/// provider who this is, and log them in (first visit creates the user row).
#[debug_handler(state = AppState)]
pub(crate) async fn lockin(
    Path(provider): Path<ClientProvider>,
    Query(LockinQuery { state, code }): Query<LockinQuery>,
    State(db_pool): State<SqlitePool>,
    State(clients): State<Clients>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let state = CsrfToken::new(state.ok_or("OAuth: without state")?);
    let code = AuthorizationCode::new(code.ok_or("OAuth: without code")?);

    let Some(stored_state) = session.get::<String>(CSRF_STATE).await? else {
        return Err("no csrf_state")?;
    };

    if state.secret().as_str() != stored_state.as_str() {
        return Err("csrf tokens don't match")?;
    }

    let Some(pkce_verifier) = session.get::<String>(PKCE_VERIFIER).await? else {
        return Err("no pkce_verifier")?;
    };

    let client = clients.get_client(provider)?;
    let http_client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    let token_result = client
        .exchange_code(code)
        .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier))
        .request_async(&http_client)
        .await?;

    let identity = clients
        .fetch_identity(provider, token_result.access_token().secret(), &http_client)
        .await?;

    let user = match db::users::find_by_provider(&db_pool, provider.id(), &identity.uid).await? {
        Some(user) => user,
        None => {
            let alias = identity.name.unwrap_or_else(super::random_alias);
            let user = db::users::create(&db_pool, provider.id(), &identity.uid, &alias).await?;
            tracing::info!("new user @{} ({})", user.handle, user.alias);
            user
        }
    };

    session.insert(USER_ID, user.id.clone()).await?;
    tracing::debug!("welcome @{}", user.handle);

    let return_url: Option<String> = session.get(RETURN_URL).await?;
    Ok(Redirect::to(&session::safe_path(return_url.as_deref())))
}
