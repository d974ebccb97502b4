//! Auth routes — register, login, logout, current-user, session cookies.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use time::Duration;

use crate::services::auth::{self as auth_svc, AuthError};
use crate::services::session::{self, SessionUser};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(secure)
        .build()
}

fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::InvalidName | AuthError::InvalidEmail | AuthError::WeakPassword => StatusCode::BAD_REQUEST,
        AuthError::EmailTaken => StatusCode::CONFLICT,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn to_session_user(row: auth_svc::UserRow) -> SessionUser {
    SessionUser { id: row.id, name: row.name, email: row.email }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct RegisterBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` — create an account and open a session.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<RegisterBody>,
) -> Result<(CookieJar, Json<SessionUser>), StatusCode> {
    let user = auth_svc::register_user(&state.pool, &body.name, &body.email, &body.password)
        .await
        .map_err(|e| {
            if matches!(e, AuthError::Db(_)) {
                tracing::error!(error = %e, "account creation failed");
            }
            auth_error_to_status(&e)
        })?;

    let token = session::create_session(&state.pool, user.id).await.map_err(|e| {
        tracing::error!(error = %e, "session creation failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let jar = jar.add(session_cookie(token, cookie_secure()));
    Ok((jar, Json(to_session_user(user))))
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` — check credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginBody>,
) -> Result<(CookieJar, Json<SessionUser>), StatusCode> {
    let account_key = auth_svc::normalize_email(&body.email).unwrap_or_else(|| body.email.trim().to_ascii_lowercase());
    if let Err(e) = state.login_limiter.check_and_record(&account_key) {
        tracing::warn!(error = %e, "login attempt rate limited");
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }

    let user = auth_svc::authenticate(&state.pool, &body.email, &body.password)
        .await
        .map_err(|e| {
            if matches!(e, AuthError::Db(_)) {
                tracing::error!(error = %e, "login failed");
            }
            auth_error_to_status(&e)
        })?;

    let token = session::create_session(&state.pool, user.id).await.map_err(|e| {
        tracing::error!(error = %e, "session creation failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let jar = jar.add(session_cookie(token, cookie_secure()));
    Ok((jar, Json(to_session_user(user))))
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
///
/// Deliberately does not require authentication: the login and register
/// pages call it on mount to guarantee a signed-out form.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value) {
        if !token.is_empty() {
            let _ = session::delete_session(&state.pool, token).await;
        }
    }

    let jar = jar.add(expired_session_cookie(cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
