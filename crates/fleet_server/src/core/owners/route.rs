use crate::core::auth::middleware::AuthClaims;
use crate::core::auth::permissions::VEHICLE_OWNERS_PATH;
use crate::core::error::{sql_error_response, ErrorResponse};
use crate::core::owners::schema::VehicleOwnersResponse;
use crate::core::state::AppState;
use axum::extract::{Query, State};
use axum::{routing::get, Router};
use fleet_sql::SqlClient;
use fleet_types::PageQuery;
use std::sync::Arc;

pub async fn get_all_vehicle_owners(
    State(state): State<Arc<AppState>>,
    _claims: AuthClaims,
    params: Option<Query<PageQuery>>,
) -> Result<VehicleOwnersResponse, ErrorResponse> {
    let pagination = params.map(|Query(q)| q).unwrap_or_default().resolve();

    let results = state
        .sql_client
        .query_vehicle_owners(&pagination)
        .await
        .map_err(|e| sql_error_response(e, "Failed to retrieve vehicle owners"))?;

    Ok(VehicleOwnersResponse::new(
        results.records,
        pagination,
        results.total_rows,
    ))
}

pub fn get_owner_router() -> Router<Arc<AppState>> {
    Router::new().route(VEHICLE_OWNERS_PATH, get(get_all_vehicle_owners))
}
