use fleet_error::SettingsError;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::env;
use std::fmt;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum SqlType {
    Postgres,
    Sqlite,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlType::Postgres => "postgres",
            SqlType::Sqlite => "sqlite",
        };
        write!(f, "{}", name)
    }
}

impl SqlType {
    /// Infer the backend from the scheme of a connection string
    pub fn from_connection_uri(uri: &str) -> Result<SqlType, SettingsError> {
        let trimmed_lowercase = uri.trim().to_lowercase();

        if trimmed_lowercase.starts_with("postgres://")
            || trimmed_lowercase.starts_with("postgresql://")
        {
            Ok(SqlType::Postgres)
        } else if trimmed_lowercase.starts_with("sqlite:") {
            Ok(SqlType::Sqlite)
        } else {
            Err(SettingsError::UnsupportedDatabase(uri.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub connection_uri: String,
    pub max_connections: u32,
    pub sql_type: SqlType,
}

impl DatabaseSettings {
    pub fn new(connection_uri: &str, max_connections: u32) -> Result<Self, SettingsError> {
        Ok(DatabaseSettings {
            connection_uri: connection_uri.to_string(),
            max_connections,
            sql_type: SqlType::from_connection_uri(connection_uri)?,
        })
    }
}

/// FleetConfig is the primary configuration struct for the fleet api server.
///
/// The database connection string is mandatory. The jwt secret is optional at load time,
/// but every token operation fails while it is unset.
#[derive(Debug, Clone)]
pub struct FleetConfig {
    pub app_name: String,
    pub app_env: String,
    pub app_version: String,
    pub server_port: u16,
    pub jwt_secret: Option<String>,
    pub database_settings: DatabaseSettings,
}

impl FleetConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, SettingsError> {
        FleetConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value for an environment variable name, if set
    ///
    /// # Returns
    ///
    /// * `FleetConfig` - The parsed configuration
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_uri = lookup("DB_CONNECTION_STRING")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| SettingsError::MissingVariable("DB_CONNECTION_STRING".to_string()))?;

        let max_connections = lookup("FLEET_MAX_CONNECTIONS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let server_port = lookup("FLEET_SERVER_PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        Ok(FleetConfig {
            app_name: "fleet-management-api".to_string(),
            app_env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            server_port,
            jwt_secret: lookup("JWT_SECRET_KEY").filter(|value| !value.is_empty()),
            database_settings: DatabaseSettings::new(&connection_uri, max_connections)?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}
