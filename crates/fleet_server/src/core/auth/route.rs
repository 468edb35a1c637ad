use crate::core::auth::schema::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::core::error::{
    bad_request, error_response, internal_server_error, sql_error_response, unauthorized,
    ErrorResponse,
};
use crate::core::state::AppState;
use axum::extract::{rejection::JsonRejection, State};
use axum::{http::StatusCode, routing::post, Json, Router};
use fleet_auth::password::{hash_password, verify_password};
use fleet_sql::schemas::schema::NewUser;
use fleet_sql::SqlClient;
use std::sync::Arc;
use tracing::{error, info};

pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, MessageResponse), ErrorResponse> {
    let Json(payload) = payload.map_err(|_| bad_request(INVALID_PAYLOAD))?;

    let role = payload.validate().map_err(bad_request)?;

    let password_hash = hash_password(payload.password.clone())
        .await
        .map_err(|e| internal_server_error(e, "Failed to hash password"))?;

    let user = NewUser {
        license_id: payload.license_for(&role),
        fullname: payload.fullname,
        email: payload.email,
        password_hash,
        role,
    };

    let user_id = state
        .sql_client
        .insert_user(&user)
        .await
        .map_err(|e| sql_error_response(e, "Failed to register user"))?;

    info!("Registered user {} as {}", user_id, user.role);

    Ok((
        StatusCode::CREATED,
        MessageResponse::new("User registration successful. Login to get started!"),
    ))
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<LoginResponse, ErrorResponse> {
    let Json(payload) = payload.map_err(|_| bad_request(INVALID_PAYLOAD))?;

    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(bad_request("Input all fields to login"));
    }

    // unknown email and wrong password answer identically
    let record = state
        .sql_client
        .get_login_record(&payload.email)
        .await
        .map_err(|e| sql_error_response(e, "Failed to login"))?
        .ok_or_else(|| unauthorized(INVALID_CREDENTIALS))?;

    verify_password(payload.password, record.password_hash)
        .await
        .map_err(|e| {
            if e.is_server_error() {
                internal_server_error(e, "Failed to login")
            } else {
                unauthorized(INVALID_CREDENTIALS)
            }
        })?;

    let token = state
        .auth_manager
        .generate_jwt(record.user_id, &record.role, record.permissions)
        .map_err(|e| {
            error!("Failed to generate token for user {}: {}", record.user_id, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate authentication token",
            )
        })?;

    Ok(LoginResponse::new(token))
}

pub fn get_auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}
