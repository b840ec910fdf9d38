use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tura_core::session::{Role, SessionContext};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Bearer token claims. Field names follow the wire format the token issuer
/// produces.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(rename = "organizationId")]
    pub organization_id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub role: String,
    pub exp: usize,
}

/// Verifies the bearer token and injects an explicit [`SessionContext`]
/// into request extensions. Every query downstream is scoped by the
/// organization id carried here; cross-tenant access is impossible by
/// construction.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized)?;

    let claims = token_data.claims;
    let role: Role = claims.role.parse().map_err(|_| AppError::Unauthorized)?;

    req.extensions_mut().insert(SessionContext::new(
        claims.organization_id,
        claims.user_id,
        role,
    ));

    Ok(next.run(req).await)
}

/// Gate for the organization admin surface. Runs after
/// [`session_middleware`]; any tenant role other than super admin is
/// rejected with 403.
pub async fn super_admin_middleware(req: Request, next: Next) -> Result<Response, AppError> {
    let session = req
        .extensions()
        .get::<SessionContext>()
        .cloned()
        .ok_or(AppError::Unauthorized)?;

    if !session.is_super_admin() {
        return Err(AppError::Forbidden(
            "Super admin access required".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
