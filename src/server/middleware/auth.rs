use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::{token::TokenService, AuthService},
    state::AppState,
};

/// User resolved from the request's bearer token.
///
/// Inserted into request extensions by [`require_auth`] and extracted by handlers that
/// need to know who is calling.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Resolves the `Authorization: Bearer` header to a stored user.
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let Some(token) = bearer_token(headers) else {
            return Err(AuthError::MissingToken.into());
        };

        AuthService::new(self.db, self.tokens)
            .authenticate(token)
            .await
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Rejects requests without a valid bearer token with 401 `Please log in`.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(request.headers())
        .await?;

    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}
