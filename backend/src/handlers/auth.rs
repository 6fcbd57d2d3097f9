//! Authentication handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{validate_email, UserProfile};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentSession;
use crate::services::Session;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
    pub user: UserProfile,
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_email(body.email.trim()).map_err(|msg| AppError::validation("email", msg))?;

    let user = state.auth.authenticate(&body.email, &body.password)?;
    let session = state.sessions.create(user).await;
    tracing::info!("User {} logged in", session.user.email);

    Ok(Json(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
        user: session.user,
    }))
}

/// The caller's session, already renewed by the session middleware
pub async fn current_session(CurrentSession(session): CurrentSession) -> Json<Session> {
    Json(session)
}

/// Logout endpoint handler
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> StatusCode {
    state.sessions.clear(session.token).await;
    tracing::info!("User {} logged out", session.user.email);
    StatusCode::NO_CONTENT
}
