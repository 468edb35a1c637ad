use crate::core::auth::middleware::{auth_api_middleware, require_permission};
use crate::core::auth::route::get_auth_router;
use crate::core::drivers::route::get_driver_router;
use crate::core::health::route::health_check;
use crate::core::owners::route::get_owner_router;
use crate::core::state::AppState;
use crate::core::vehicles::route::get_vehicle_router;
use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub async fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::POST])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let public_routes = Router::new()
        .route("/healthcheck", get(health_check))
        .merge(get_auth_router());

    // route layers run outermost last: authentication first, then the permission check
    let protected_routes = Router::new()
        .merge(get_vehicle_router())
        .merge(get_driver_router())
        .merge(get_owner_router())
        .route_layer(middleware::from_fn(require_permission))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_api_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(app_state)
        .layer(cors)
}
