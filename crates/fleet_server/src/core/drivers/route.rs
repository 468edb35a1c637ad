use crate::core::auth::middleware::AuthClaims;
use crate::core::auth::permissions::DRIVERS_PATH;
use crate::core::drivers::schema::DriversResponse;
use crate::core::error::{sql_error_response, ErrorResponse};
use crate::core::state::AppState;
use axum::extract::{Query, State};
use axum::{routing::get, Router};
use fleet_sql::SqlClient;
use fleet_types::PageQuery;
use std::sync::Arc;

pub async fn get_all_drivers(
    State(state): State<Arc<AppState>>,
    _claims: AuthClaims,
    params: Option<Query<PageQuery>>,
) -> Result<DriversResponse, ErrorResponse> {
    let pagination = params.map(|Query(q)| q).unwrap_or_default().resolve();

    let results = state
        .sql_client
        .query_drivers(&pagination)
        .await
        .map_err(|e| sql_error_response(e, "Failed to retrieve drivers"))?;

    Ok(DriversResponse::new(
        results.records,
        pagination,
        results.total_rows,
    ))
}

pub fn get_driver_router() -> Router<Arc<AppState>> {
    Router::new().route(DRIVERS_PATH, get(get_all_drivers))
}
