use fleet_auth::AuthManager;
use fleet_sql::SqlClientEnum;
use std::sync::Arc;

pub struct AppState {
    pub sql_client: Arc<SqlClientEnum>,
    pub auth_manager: Arc<AuthManager>,
}
