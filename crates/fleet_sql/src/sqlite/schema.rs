use crate::schemas::schema::LoginRecord;
use sqlx::FromRow;

/// SQLite has no array type, so permissions come back as a `GROUP_CONCAT` string
#[derive(Debug, Clone, FromRow)]
pub struct SqliteLoginRow {
    pub user_id: i64,
    pub password_hash: String,
    pub role: String,
    pub permissions: Option<String>,
}

impl From<SqliteLoginRow> for LoginRecord {
    fn from(row: SqliteLoginRow) -> Self {
        let mut permissions: Vec<String> = row
            .permissions
            .map(|joined| {
                joined
                    .split(',')
                    .filter(|p| !p.is_empty())
                    .map(|p| p.to_string())
                    .collect()
            })
            .unwrap_or_default();
        permissions.sort();

        LoginRecord {
            user_id: row.user_id,
            password_hash: row.password_hash,
            role: row.role,
            permissions,
        }
    }
}
