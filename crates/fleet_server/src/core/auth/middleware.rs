use crate::core::auth::permissions::required_permission;
use crate::core::error::{forbidden, unauthorized, ErrorResponse};
use crate::core::state::AppState;

use axum::async_trait;
use axum::extract::{FromRequestParts, MatchedPath};
use axum::http::{header, request::Parts};
use axum::response::IntoResponse;
use axum::{
    extract::{Request, State},
    middleware::Next,
};
use fleet_auth::permission::has_permission;
use fleet_auth::Claims;
use std::sync::Arc;
use tracing::warn;

pub const MISSING_HEADER: &str = "Authorization header required";
pub const INVALID_FORMAT: &str = "Invalid token format (expected 'Bearer <token>')";
pub const MISSING_CONTEXT: &str = "Authentication context missing";
pub const MISSING_USER: &str = "User details not found in context. Authentication is required";

/// Validate the bearer token and attach its claims to the request
pub async fn auth_api_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, ErrorResponse> {
    let auth_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| unauthorized(MISSING_HEADER))?
        .to_str()
        .map_err(|_| unauthorized(INVALID_FORMAT))?;

    let token = auth_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized(INVALID_FORMAT))?;

    let claims = state
        .auth_manager
        .validate_jwt(token)
        .map_err(|e| unauthorized(&format!("Invalid or expired token: {}", e)))?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Check the attached claims against the permission registered for the matched route.
/// Every route behind this layer must have a table entry; unlisted routes are refused.
pub async fn require_permission(
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ErrorResponse> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| forbidden(MISSING_CONTEXT))?;

    let permission = req
        .extensions()
        .get::<MatchedPath>()
        .and_then(|path| required_permission(req.method(), path.as_str()));

    let Some(permission) = permission else {
        warn!(
            "No permission registered for {} {}, refusing user {}",
            req.method(),
            req.uri().path(),
            claims.user_id
        );
        return Err(forbidden("Forbidden"));
    };

    if !has_permission(claims, permission) {
        warn!(
            "Permission denied for user {}: {} required on {} {}",
            claims.user_id,
            permission,
            req.method(),
            req.uri().path()
        );
        return Err(forbidden("Forbidden"));
    }

    Ok(next.run(req).await)
}

/// Claims of the authenticated caller, as attached by `auth_api_middleware`
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthClaims)
            .ok_or_else(|| unauthorized(MISSING_USER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::permissions::DRIVERS_PATH;
    use axum::body::Body;
    use axum::http::{Method, StatusCode};
    use axum::{middleware, routing::get, Extension, Router};
    use fleet_auth::permission::ADMIN_READ_DRIVER;
    use tower::ServiceExt;

    async fn ok() -> &'static str {
        "ok"
    }

    fn router(claims: Option<Claims>) -> Router {
        let router = Router::new()
            .route(DRIVERS_PATH, get(ok))
            .route("/open", get(ok))
            .route_layer(middleware::from_fn(require_permission));

        match claims {
            Some(claims) => router.route_layer(Extension(claims)),
            None => router,
        }
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        send(app, Method::GET, uri).await
    }

    async fn send(app: Router, method: Method, uri: &str) -> StatusCode {
        let req = axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(req).await.unwrap().status()
    }

    fn claims_with(permissions: &[&str]) -> Claims {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;

        Claims::new(
            1,
            "admin",
            permissions.iter().map(|p| p.to_string()).collect(),
            now,
        )
    }

    #[tokio::test]
    async fn test_missing_context_is_forbidden() {
        assert_eq!(status_of(router(None), DRIVERS_PATH).await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unlisted_route_is_refused() {
        let granted = router(Some(claims_with(&[ADMIN_READ_DRIVER])));
        assert_eq!(status_of(granted, "/open").await, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_head_requires_get_permission() {
        let denied = router(Some(claims_with(&[])));
        assert_eq!(
            send(denied, Method::HEAD, DRIVERS_PATH).await,
            StatusCode::FORBIDDEN
        );

        let granted = router(Some(claims_with(&[ADMIN_READ_DRIVER])));
        assert_eq!(
            send(granted, Method::HEAD, DRIVERS_PATH).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_permission_must_match_exactly() {
        let granted = router(Some(claims_with(&[ADMIN_READ_DRIVER])));
        assert_eq!(status_of(granted, DRIVERS_PATH).await, StatusCode::OK);

        let prefix = router(Some(claims_with(&["admin:read"])));
        assert_eq!(status_of(prefix, DRIVERS_PATH).await, StatusCode::FORBIDDEN);

        let empty = router(Some(claims_with(&[])));
        assert_eq!(status_of(empty, DRIVERS_PATH).await, StatusCode::FORBIDDEN);
    }
}
