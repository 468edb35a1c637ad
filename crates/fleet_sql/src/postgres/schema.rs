use crate::schemas::schema::LoginRecord;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PostgresLoginRow {
    pub user_id: i64,
    pub password_hash: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl From<PostgresLoginRow> for LoginRecord {
    fn from(row: PostgresLoginRow) -> Self {
        LoginRecord {
            user_id: row.user_id,
            password_hash: row.password_hash,
            role: row.role,
            permissions: row.permissions,
        }
    }
}
