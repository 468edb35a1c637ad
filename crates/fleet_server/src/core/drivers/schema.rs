use axum::response::IntoResponse;
use axum::Json;
use fleet_sql::schemas::schema::DriverRecord;
use fleet_types::Pagination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DriversResponse {
    pub data: Vec<DriverRecord>,
    pub page: i64,
    pub limit: i64,
    pub total: usize,
    pub total_drivers: i64,
}

impl DriversResponse {
    pub fn new(data: Vec<DriverRecord>, pagination: Pagination, total_drivers: i64) -> Self {
        Self {
            total: data.len(),
            data,
            page: pagination.page,
            limit: pagination.limit,
            total_drivers,
        }
    }
}

impl IntoResponse for DriversResponse {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
