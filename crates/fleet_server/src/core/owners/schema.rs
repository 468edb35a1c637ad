use axum::response::IntoResponse;
use axum::Json;
use fleet_sql::schemas::schema::VehicleOwnerRecord;
use fleet_types::Pagination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleOwnersResponse {
    pub data: Vec<VehicleOwnerRecord>,
    pub page: i64,
    pub limit: i64,
    pub total: usize,
    pub total_vehicle_owners: i64,
}

impl VehicleOwnersResponse {
    pub fn new(
        data: Vec<VehicleOwnerRecord>,
        pagination: Pagination,
        total_vehicle_owners: i64,
    ) -> Self {
        Self {
            total: data.len(),
            data,
            page: pagination.page,
            limit: pagination.limit,
            total_vehicle_owners,
        }
    }
}

impl IntoResponse for VehicleOwnersResponse {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
