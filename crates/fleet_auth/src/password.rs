use fleet_error::AuthError;
use tokio::task;

/// Salted one-way hash with the library default parameters.
/// Runs on the blocking pool since hashing is deliberately slow.
pub async fn hash_password(password: String) -> Result<String, AuthError> {
    task::spawn_blocking(move || password_auth::generate_hash(password))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Compare a password against a stored hash. Any mismatch is `InvalidCredentials`.
pub async fn verify_password(password: String, password_hash: String) -> Result<(), AuthError> {
    task::spawn_blocking(move || password_auth::verify_password(password, &password_hash))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("correct horse".to_string()).await.unwrap();
        assert_ne!(hash, "correct horse");

        verify_password("correct horse".to_string(), hash.clone())
            .await
            .unwrap();

        let err = verify_password("wrong horse".to_string(), hash)
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let first = hash_password("password123".to_string()).await.unwrap();
        let second = hash_password("password123".to_string()).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_verify_garbage_hash() {
        let err = verify_password("password123".to_string(), "not-a-hash".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }
}
