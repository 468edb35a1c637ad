use axum::response::IntoResponse;
use axum::Json;
use fleet_types::Role;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Missing fields deserialize to empty values so they fail validation, not parsing
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub license_id: Option<String>,
}

impl RegisterRequest {
    /// Validate the payload and resolve the requested role
    pub fn validate(&self) -> Result<Role, &'static str> {
        if self.email.is_empty() || self.fullname.is_empty() || self.role.is_empty() {
            return Err("Email, name or role can't be empty");
        }

        // length in bytes
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err("Password must be at least 8 characters long");
        }

        let role = Role::from_str(&self.role).map_err(|_| "Invalid role")?;

        if role == Role::Driver && self.license_id.as_deref().unwrap_or_default().is_empty() {
            return Err("License ID is required to register as a driver");
        }

        Ok(role)
    }

    /// License ids only belong to drivers
    pub fn license_for(&self, role: &Role) -> Option<String> {
        match role {
            Role::Driver => self.license_id.clone(),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

impl LoginResponse {
    pub fn new(token: String) -> Self {
        Self {
            message: "Login successful!".to_string(),
            token,
        }
    }
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
