use axum::response::IntoResponse;
use axum::Json;
use fleet_sql::schemas::schema::{NewVehicle, OwnedVehicleRecord, VehicleSummaryRecord};
use fleet_types::Pagination;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddVehicleRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
}

impl AddVehicleRequest {
    pub fn into_new_vehicle(self) -> Result<NewVehicle, &'static str> {
        if self.make.is_empty() || self.model.is_empty() || self.license_plate.is_empty() {
            return Err("All fields are required");
        }

        if self.year <= 0 {
            return Err("All fields are required");
        }

        Ok(NewVehicle {
            make: self.make,
            model: self.model,
            year: self.year,
            license_plate: self.license_plate,
        })
    }
}

/// Clients send the driver id either as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DriverId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignDriverRequest {
    pub driver_id: Option<DriverId>,
}

impl AssignDriverRequest {
    pub fn driver_id(&self) -> Result<i64, &'static str> {
        match &self.driver_id {
            None => Err("All fields are required"),
            Some(DriverId::Number(id)) => Ok(*id),
            Some(DriverId::Text(text)) if text.is_empty() => Err("All fields are required"),
            Some(DriverId::Text(text)) => text.parse::<i64>().map_err(|_| "Invalid driver ID"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OwnedVehiclesResponse {
    pub data: Vec<OwnedVehicleRecord>,
    pub page: i64,
    pub limit: i64,
    pub total: usize,
    pub fleet_size: i32,
}

impl OwnedVehiclesResponse {
    pub fn new(data: Vec<OwnedVehicleRecord>, pagination: Pagination, fleet_size: i32) -> Self {
        Self {
            total: data.len(),
            data,
            page: pagination.page,
            limit: pagination.limit,
            fleet_size,
        }
    }
}

impl IntoResponse for OwnedVehiclesResponse {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VehiclesResponse {
    pub data: Vec<VehicleSummaryRecord>,
    pub page: i64,
    pub limit: i64,
    pub total: usize,
    pub total_vehicles: i64,
}

impl VehiclesResponse {
    pub fn new(data: Vec<VehicleSummaryRecord>, pagination: Pagination, total_vehicles: i64) -> Self {
        Self {
            total: data.len(),
            data,
            page: pagination.page,
            limit: pagination.limit,
            total_vehicles,
        }
    }
}

impl IntoResponse for VehiclesResponse {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vehicle_validation() {
        let req: AddVehicleRequest = serde_json::from_str(
            r#"{"make": "Toyota", "model": "Corolla", "year": 2020, "license_plate": "ABC-123"}"#,
        )
        .unwrap();
        let vehicle = req.into_new_vehicle().unwrap();
        assert_eq!(vehicle.year, 2020);

        let missing_year: AddVehicleRequest = serde_json::from_str(
            r#"{"make": "Toyota", "model": "Corolla", "license_plate": "ABC-123"}"#,
        )
        .unwrap();
        assert_eq!(
            missing_year.into_new_vehicle().unwrap_err(),
            "All fields are required"
        );

        let blank_plate: AddVehicleRequest = serde_json::from_str(
            r#"{"make": "Toyota", "model": "Corolla", "year": 2020, "license_plate": ""}"#,
        )
        .unwrap();
        assert!(blank_plate.into_new_vehicle().is_err());
    }

    #[test]
    fn test_driver_id_accepts_number_or_numeric_string() {
        let parse = |body: &str| {
            serde_json::from_str::<AssignDriverRequest>(body)
                .unwrap()
                .driver_id()
        };

        assert_eq!(parse(r#"{"driver_id": 5}"#), Ok(5));
        assert_eq!(parse(r#"{"driver_id": "5"}"#), Ok(5));
        assert_eq!(parse(r#"{"driver_id": ""}"#), Err("All fields are required"));
        assert_eq!(parse(r#"{}"#), Err("All fields are required"));
        assert_eq!(parse(r#"{"driver_id": null}"#), Err("All fields are required"));
        assert_eq!(parse(r#"{"driver_id": "five"}"#), Err("Invalid driver ID"));

        // neither a number nor a string
        assert!(serde_json::from_str::<AssignDriverRequest>(r#"{"driver_id": [5]}"#).is_err());
    }

    #[test]
    fn test_page_envelope_counts_rows_on_page() {
        let response = OwnedVehiclesResponse::new(vec![], Pagination::new(3, 5), 7);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["fleet_size"], 7);
        assert_eq!(value["page"], 3);
        assert_eq!(value["limit"], 5);
        assert!(value["data"].as_array().unwrap().is_empty());
    }
}
