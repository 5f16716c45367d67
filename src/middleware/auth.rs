use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::{Claims, TokenService};
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a verified token.
///
/// Reflects the claims at issuance time, not the current record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub is_admin: bool,
    pub is_seller: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            is_admin: claims.is_admin,
            is_seller: claims.is_seller,
        }
    }
}

/// RequireAuth: verifies the bearer token and injects `AuthUser`.
///
/// Short-circuits with 401 before the handler runs when the token is
/// missing or fails verification.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = authenticate(&state.tokens, request.headers())?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Resolve the caller from request headers
pub fn authenticate(tokens: &TokenService, headers: &HeaderMap) -> Result<AuthUser, ApiError> {
    let token = bearer_token(headers)?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected bearer token: {}", e);
        ApiError::unauthorized("Invalid Token")
    })?;

    Ok(AuthUser::from(claims))
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("No Token"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Token"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err(ApiError::unauthorized("No Token")),
        None => Err(ApiError::unauthorized("Invalid Token")),
    }
}
