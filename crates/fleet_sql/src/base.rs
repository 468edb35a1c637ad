use crate::schemas::schema::{
    DriverRecord, LoginRecord, NewUser, NewVehicle, OwnedVehicleRecord, PageResults,
    VehicleOwnerRecord, VehicleRecord, VehicleSummaryRecord,
};
use async_trait::async_trait;
use fleet_error::SqlError;
use fleet_settings::DatabaseSettings;
use fleet_types::Pagination;

pub const EMAIL_EXISTS: &str = "Email already exists";
pub const LICENSE_PLATE_EXISTS: &str = "License plate already exists";
pub const OWNER_NOT_FOUND: &str = "Vehicle owner not found";
pub const VEHICLE_NOT_FOUND: &str = "Vehicle not found";
pub const VEHICLE_NOT_AVAILABLE: &str = "Vehicle is not available";
pub const DRIVER_NOT_FOUND: &str = "Driver not found";
pub const DRIVER_ALREADY_ASSIGNED: &str = "Driver is already assigned";

#[async_trait]
pub trait SqlClient: Sized {
    async fn new(settings: &DatabaseSettings) -> Result<Self, SqlError>;
    async fn run_migrations(&self) -> Result<(), SqlError>;

    /// Insert a user and, depending on role, its driver or vehicle owner profile.
    /// Both rows are written in one transaction.
    async fn insert_user(&self, user: &NewUser) -> Result<i64, SqlError>;

    /// Look up a user by email together with the permissions granted to its role
    async fn get_login_record(&self, email: &str) -> Result<Option<LoginRecord>, SqlError>;

    /// Insert a vehicle owned by `owner_id` and bump the owner's fleet size in the same transaction
    async fn insert_vehicle(
        &self,
        owner_id: i64,
        vehicle: &NewVehicle,
    ) -> Result<VehicleRecord, SqlError>;

    async fn get_fleet_size(&self, owner_id: i64) -> Result<i32, SqlError>;

    async fn query_owned_vehicles(
        &self,
        owner_id: i64,
        pagination: &Pagination,
    ) -> Result<PageResults<OwnedVehicleRecord>, SqlError>;

    async fn query_vehicles(
        &self,
        pagination: &Pagination,
    ) -> Result<PageResults<VehicleSummaryRecord>, SqlError>;

    async fn query_drivers(
        &self,
        pagination: &Pagination,
    ) -> Result<PageResults<DriverRecord>, SqlError>;

    async fn query_vehicle_owners(
        &self,
        pagination: &Pagination,
    ) -> Result<PageResults<VehicleOwnerRecord>, SqlError>;

    /// Assign a driver to an available vehicle owned by `owner_id`.
    ///
    /// The vehicle moves to `in_use` and the driver is flagged as assigned, or nothing changes.
    async fn assign_driver(
        &self,
        owner_id: i64,
        vehicle_id: i64,
        driver_id: i64,
    ) -> Result<(), SqlError>;
}

pub fn query_error(e: sqlx::Error) -> SqlError {
    SqlError::QueryError(format!("{}", e))
}

/// Map a unique constraint violation to `UniqueViolation(message)`, anything else to a query error
pub fn unique_violation_or(e: sqlx::Error, message: &str) -> SqlError {
    match e.as_database_error() {
        Some(db_error) if db_error.is_unique_violation() => {
            SqlError::UniqueViolation(message.to_string())
        }
        _ => query_error(e),
    }
}

/// Map a foreign key violation to `NotFound(message)`, anything else to a query error
pub fn foreign_key_violation_or(e: sqlx::Error, message: &str) -> SqlError {
    match e.as_database_error() {
        Some(db_error) if db_error.is_foreign_key_violation() => {
            SqlError::NotFound(message.to_string())
        }
        _ => query_error(e),
    }
}
