use crate::schema::Claims;
use chrono::Utc;
use fleet_error::AuthError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// The only accepted signing algorithm
const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
struct JwtKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

/// Issues and validates stateless session tokens
#[derive(Clone)]
pub struct AuthManager {
    keys: Option<JwtKeys>,
    validation: Validation,
}

impl AuthManager {
    /// Build a manager from the configured secret.
    ///
    /// A missing secret is not fatal here; every token operation fails instead.
    pub fn new(secret: Option<&str>) -> Self {
        let keys = secret.filter(|s| !s.is_empty()).map(|s| JwtKeys {
            encoding_key: EncodingKey::from_secret(s.as_bytes()),
            decoding_key: DecodingKey::from_secret(s.as_bytes()),
        });

        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        Self { keys, validation }
    }

    fn keys(&self) -> Result<&JwtKeys, AuthError> {
        self.keys.as_ref().ok_or(AuthError::MissingSecret)
    }

    /// Sign an arbitrary set of claims
    pub fn sign_claims(&self, claims: &Claims) -> Result<String, AuthError> {
        let keys = self.keys()?;

        encode(&Header::new(ALGORITHM), claims, &keys.encoding_key)
            .map_err(|e| AuthError::Encoding(e.to_string()))
    }

    /// Issue a token for a user, valid for two hours from now
    ///
    /// # Arguments
    ///
    /// * `user_id` - The id of the user
    /// * `role` - The role name of the user
    /// * `permissions` - The permissions held by the role at login time
    ///
    /// # Returns
    ///
    /// * `String` - The signed token
    pub fn generate_jwt(
        &self,
        user_id: i64,
        role: &str,
        permissions: Vec<String>,
    ) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, role, permissions, Utc::now().timestamp());
        self.sign_claims(&claims)
    }

    /// Verify signature, algorithm and expiry, returning the embedded claims untouched
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, AuthError> {
        let keys = self.keys()?;

        let token_data =
            decode::<Claims>(token, &keys.decoding_key, &self.validation).map_err(|e| {
                debug!("Token validation failed: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::Expired,
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                    ErrorKind::InvalidAlgorithm => AuthError::InvalidAlgorithm,
                    _ => AuthError::Malformed(e.to_string()),
                }
            })?;

        // the library accepts a token in its final second; we do not
        if token_data.claims.is_expired_at(Utc::now().timestamp()) {
            return Err(AuthError::Expired);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TOKEN_TTL_SECS;

    const SECRET: &str = "test-secret-key-with-enough-length";

    fn permissions() -> Vec<String> {
        vec![
            "owner:create.vehicle".to_string(),
            "owner:read.vehicle".to_string(),
        ]
    }

    #[test]
    fn test_generate_and_validate() {
        let manager = AuthManager::new(Some(SECRET));
        let token = manager
            .generate_jwt(42, "vehicle_owner", permissions())
            .unwrap();

        // header.payload.signature
        assert_eq!(token.split('.').count(), 3);

        let claims = manager.validate_jwt(&token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.role, "vehicle_owner");
        assert_eq!(claims.permissions, permissions());
        assert_eq!(claims.expires_at - claims.issued_at, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_missing_secret() {
        let manager = AuthManager::new(None);
        assert_eq!(
            manager.generate_jwt(1, "admin", vec![]).unwrap_err(),
            AuthError::MissingSecret
        );
        assert_eq!(
            manager.validate_jwt("a.b.c").unwrap_err(),
            AuthError::MissingSecret
        );

        let manager = AuthManager::new(Some(""));
        assert_eq!(
            manager.generate_jwt(1, "admin", vec![]).unwrap_err(),
            AuthError::MissingSecret
        );
    }

    #[test]
    fn test_expired_token() {
        let manager = AuthManager::new(Some(SECRET));
        let now = Utc::now().timestamp();

        // expires exactly now
        let claims = Claims::new(1, "admin", vec![], now - TOKEN_TTL_SECS);
        let token = manager.sign_claims(&claims).unwrap();
        assert_eq!(manager.validate_jwt(&token).unwrap_err(), AuthError::Expired);

        // expired long ago
        let claims = Claims::new(1, "admin", vec![], now - 3 * TOKEN_TTL_SECS);
        let token = manager.sign_claims(&claims).unwrap();
        assert_eq!(manager.validate_jwt(&token).unwrap_err(), AuthError::Expired);

        // one minute left
        let claims = Claims::new(1, "admin", vec![], now - TOKEN_TTL_SECS + 60);
        let token = manager.sign_claims(&claims).unwrap();
        assert!(manager.validate_jwt(&token).is_ok());
    }

    #[test]
    fn test_wrong_key() {
        let issuer = AuthManager::new(Some("some-other-secret"));
        let token = issuer.generate_jwt(1, "admin", vec![]).unwrap();

        let manager = AuthManager::new(Some(SECRET));
        assert_eq!(
            manager.validate_jwt(&token).unwrap_err(),
            AuthError::InvalidSignature
        );
    }

    #[test]
    fn test_tampered_payload() {
        let manager = AuthManager::new(Some(SECRET));
        let token = manager.generate_jwt(1, "driver", vec![]).unwrap();

        // swap in the payload of a token carrying admin permissions
        let forged = manager
            .generate_jwt(1, "admin", vec!["admin:read.driver".to_string()])
            .unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert_eq!(
            manager.validate_jwt(&tampered).unwrap_err(),
            AuthError::InvalidSignature
        );
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let manager = AuthManager::new(Some(SECRET));
        let claims = Claims::new(1, "admin", vec![], Utc::now().timestamp());

        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            manager.validate_jwt(&token).unwrap_err(),
            AuthError::InvalidAlgorithm
        );
    }

    #[test]
    fn test_malformed_token() {
        let manager = AuthManager::new(Some(SECRET));

        assert!(matches!(
            manager.validate_jwt("not-a-token").unwrap_err(),
            AuthError::Malformed(_)
        ));
        assert!(matches!(
            manager.validate_jwt("").unwrap_err(),
            AuthError::Malformed(_)
        ));
    }
}
