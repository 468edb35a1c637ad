use serde::{Deserialize, Serialize};

/// Token lifetime in seconds
pub const TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

/// Payload of a session token.
///
/// The permission list is a snapshot of the role's permissions at login time and is
/// never refreshed while the token lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub role: String,
    pub permissions: Vec<String>,
    #[serde(rename = "iat")]
    pub issued_at: i64,
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    pub fn new(user_id: i64, role: &str, permissions: Vec<String>, issued_at: i64) -> Self {
        Claims {
            user_id,
            role: role.to_string(),
            permissions,
            issued_at,
            expires_at: issued_at + TOKEN_TTL_SECS,
        }
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}
