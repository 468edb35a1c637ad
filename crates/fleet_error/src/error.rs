use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Missing required environment variable: {0}")]
    MissingVariable(String),

    #[error("Unsupported database connection string: {0}")]
    UnsupportedDatabase(String),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging Error: {0}")]
    Error(String),
}

#[derive(Error, Debug)]
pub enum SqlError {
    #[error("Failed to connect to the database: {0}")]
    ConnectionError(String),

    #[error("Failed to run migrations: {0}")]
    MigrationError(String),

    #[error("Failed to run query: {0}")]
    QueryError(String),

    #[error("{0}")]
    UniqueViolation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("JWT_SECRET_KEY environment variable not set")]
    MissingSecret,

    #[error("token has expired")]
    Expired,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("unexpected signing method")]
    InvalidAlgorithm,

    #[error("token parsing error: {0}")]
    Malformed(String),

    #[error("Failed to sign token: {0}")]
    Encoding(String),

    #[error("Failed to hash password: {0}")]
    Hashing(String),

    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl AuthError {
    /// Errors caused by server configuration rather than by the caller
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AuthError::MissingSecret | AuthError::Encoding(_) | AuthError::Hashing(_)
        )
    }
}
