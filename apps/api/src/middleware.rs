use std::str::FromStr;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use kapelle_core::AppError;
use kapelle_domain::{ActorIdentity, Role};

use crate::error::{ApiError, ApiResult};

/// Header carrying the caller's subject identifier.
pub const ACTOR_SUBJECT_HEADER: &str = "x-actor-subject";
/// Header carrying the caller's role value.
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Resolves the caller identity from request headers.
///
/// The front-end holds the signed-in user and forwards subject and role on
/// every call; token validation is the identity provider's concern, not
/// this API's.
pub async fn require_actor(mut request: Request, next: Next) -> ApiResult<Response> {
    let subject = required_header(&request, ACTOR_SUBJECT_HEADER)?;
    let role_value = required_header(&request, ACTOR_ROLE_HEADER)?;
    let role = Role::from_str(role_value.as_str())
        .map_err(|_| AppError::Unauthorized(format!("unknown actor role '{role_value}'")))?;

    request
        .extensions_mut()
        .insert(ActorIdentity::new(subject, role));
    Ok(next.run(request).await)
}

fn required_header(request: &Request, name: &str) -> ApiResult<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ApiError(AppError::Unauthorized(format!("missing '{name}' header"))))
}
