//! Session authentication middleware
//!
//! Resolves the `Authorization: Bearer <token>` header against the session
//! store, renewing the session on every authenticated request.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::error::AppError;
use crate::services::Session;
use crate::AppState;

/// Parse the bearer token out of an Authorization header value
fn bearer_token(header: Option<&str>) -> Result<Uuid, AppError> {
    let token = header
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing or invalid Authorization header".into()))?;

    Uuid::parse_str(token.trim()).map_err(|_| AppError::InvalidSession)
}

/// Rejects requests without a live session; inserts the renewed `Session`
/// into the request extensions otherwise
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match bearer_token(header) {
        Ok(token) => token,
        Err(err) => return err.into_response(),
    };

    let session = match state.sessions.extend(token).await {
        Some(session) => session,
        None => return AppError::InvalidSession.into_response(),
    };

    request.extensions_mut().insert(session);
    next.run(request).await
}

/// Extractor for the session resolved by `require_session`
#[derive(Clone, Debug)]
pub struct CurrentSession(pub Session);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(CurrentSession)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        let token = Uuid::new_v4();
        let header = format!("Bearer {}", token);
        assert_eq!(bearer_token(Some(&header)).unwrap(), token);
    }

    #[test]
    fn test_missing_or_malformed_header() {
        assert!(matches!(bearer_token(None), Err(AppError::Unauthorized(_))));
        assert!(matches!(
            bearer_token(Some("Basic abc")),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            bearer_token(Some("Bearer not-a-uuid")),
            Err(AppError::InvalidSession)
        ));
    }
}
