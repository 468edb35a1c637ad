use crate::core::auth::middleware::AuthClaims;
use crate::core::auth::permissions::{ASSIGN_DRIVER_PATH, OWNED_VEHICLES_PATH, VEHICLES_PATH};
use crate::core::auth::route::INVALID_PAYLOAD;
use crate::core::auth::schema::MessageResponse;
use crate::core::error::{bad_request, sql_error_response, ErrorResponse};
use crate::core::state::AppState;
use crate::core::vehicles::schema::{
    AddVehicleRequest, AssignDriverRequest, OwnedVehiclesResponse, VehiclesResponse,
};
use axum::extract::{rejection::JsonRejection, Path, Query, State};
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fleet_sql::schemas::schema::VehicleRecord;
use fleet_sql::SqlClient;
use fleet_types::PageQuery;
use std::sync::Arc;
use tracing::info;

pub async fn add_vehicle(
    State(state): State<Arc<AppState>>,
    AuthClaims(claims): AuthClaims,
    payload: Result<Json<AddVehicleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VehicleRecord>), ErrorResponse> {
    let Json(payload) = payload.map_err(|_| bad_request(INVALID_PAYLOAD))?;
    let vehicle = payload.into_new_vehicle().map_err(bad_request)?;

    let record = state
        .sql_client
        .insert_vehicle(claims.user_id, &vehicle)
        .await
        .map_err(|e| sql_error_response(e, "Failed to add vehicle"))?;

    info!("Owner {} added vehicle {}", claims.user_id, record.id);

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_owned_vehicles(
    State(state): State<Arc<AppState>>,
    AuthClaims(claims): AuthClaims,
    params: Option<Query<PageQuery>>,
) -> Result<OwnedVehiclesResponse, ErrorResponse> {
    let pagination = params.map(|Query(q)| q).unwrap_or_default().resolve();

    let fleet_size = state
        .sql_client
        .get_fleet_size(claims.user_id)
        .await
        .map_err(|e| sql_error_response(e, "Failed to retrieve fleet size"))?;

    let results = state
        .sql_client
        .query_owned_vehicles(claims.user_id, &pagination)
        .await
        .map_err(|e| sql_error_response(e, "Failed to retrieve vehicles"))?;

    Ok(OwnedVehiclesResponse::new(
        results.records,
        pagination,
        fleet_size,
    ))
}

pub async fn get_all_vehicles(
    State(state): State<Arc<AppState>>,
    _claims: AuthClaims,
    params: Option<Query<PageQuery>>,
) -> Result<VehiclesResponse, ErrorResponse> {
    let pagination = params.map(|Query(q)| q).unwrap_or_default().resolve();

    let results = state
        .sql_client
        .query_vehicles(&pagination)
        .await
        .map_err(|e| sql_error_response(e, "Failed to retrieve vehicles"))?;

    Ok(VehiclesResponse::new(
        results.records,
        pagination,
        results.total_rows,
    ))
}

pub async fn assign_driver(
    State(state): State<Arc<AppState>>,
    AuthClaims(claims): AuthClaims,
    Path(vehicle_id): Path<String>,
    payload: Result<Json<AssignDriverRequest>, JsonRejection>,
) -> Result<MessageResponse, ErrorResponse> {
    let vehicle_id = vehicle_id
        .parse::<i64>()
        .map_err(|_| bad_request("Invalid vehicle ID"))?;

    let Json(payload) = payload.map_err(|_| bad_request(INVALID_PAYLOAD))?;
    let driver_id = payload.driver_id().map_err(bad_request)?;

    state
        .sql_client
        .assign_driver(claims.user_id, vehicle_id, driver_id)
        .await
        .map_err(|e| sql_error_response(e, "Failed to assign driver"))?;

    info!(
        "Owner {} assigned driver {} to vehicle {}",
        claims.user_id, driver_id, vehicle_id
    );

    Ok(MessageResponse::new("Vehicle assigned successfully"))
}

pub fn get_vehicle_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(VEHICLES_PATH, post(add_vehicle).get(get_all_vehicles))
        .route(ASSIGN_DRIVER_PATH, post(assign_driver))
        .route(OWNED_VEHICLES_PATH, get(get_owned_vehicles))
}
