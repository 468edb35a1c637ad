use crate::base::{
    foreign_key_violation_or, query_error, unique_violation_or, SqlClient,
    DRIVER_ALREADY_ASSIGNED, DRIVER_NOT_FOUND, EMAIL_EXISTS, LICENSE_PLATE_EXISTS,
    OWNER_NOT_FOUND, VEHICLE_NOT_AVAILABLE, VEHICLE_NOT_FOUND,
};
use crate::queries::shared::Queries;
use crate::schemas::schema::{
    DriverRecord, LoginRecord, NewUser, NewVehicle, OwnedVehicleRecord, PageResults,
    VehicleOwnerRecord, VehicleRecord, VehicleSummaryRecord,
};
use crate::sqlite::schema::SqliteLoginRow;
use async_trait::async_trait;
use fleet_error::SqlError;
use fleet_settings::DatabaseSettings;
use fleet_types::{Pagination, Role, VehicleStatus};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

const GET_LOGIN_RECORD: &str = include_str!("get_login_record.sql");

pub struct SqliteClient {
    pub pool: Pool<Sqlite>,
}

#[async_trait]
impl SqlClient for SqliteClient {
    async fn new(settings: &DatabaseSettings) -> Result<Self, SqlError> {
        let mut options = SqlitePoolOptions::new().max_connections(settings.max_connections);

        // every in-memory connection is its own database, so pin the pool to one connection
        if settings.connection_uri.contains(":memory:") {
            options = options
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let connect_options = SqliteConnectOptions::from_str(&settings.connection_uri)
            .map_err(|e| SqlError::ConnectionError(format!("{}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = options
            .connect_with(connect_options)
            .await
            .map_err(|e| SqlError::ConnectionError(format!("{}", e)))?;

        let client = Self { pool };
        client.run_migrations().await?;

        Ok(client)
    }

    async fn run_migrations(&self) -> Result<(), SqlError> {
        info!("Running migrations");
        sqlx::migrate!("src/sqlite/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| SqlError::MigrationError(format!("{}", e)))?;

        Ok(())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<i64, SqlError> {
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        let user_id: i64 = sqlx::query_scalar(Queries::InsertUser.get_query())
            .bind(&user.fullname)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| unique_violation_or(e, EMAIL_EXISTS))?;

        match user.role {
            Role::Driver => {
                let license_id = user.license_id.as_deref().ok_or_else(|| {
                    SqlError::QueryError("A license id is required for drivers".to_string())
                })?;

                sqlx::query(Queries::InsertDriver.get_query())
                    .bind(user_id)
                    .bind(license_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(query_error)?;
            }
            Role::VehicleOwner => {
                sqlx::query(Queries::InsertVehicleOwner.get_query())
                    .bind(user_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(query_error)?;
            }
            Role::Admin => {}
        }

        tx.commit().await.map_err(query_error)?;
        debug!("Inserted user {} with role {}", user_id, user.role);

        Ok(user_id)
    }

    async fn get_login_record(&self, email: &str) -> Result<Option<LoginRecord>, SqlError> {
        let row: Option<SqliteLoginRow> = sqlx::query_as(GET_LOGIN_RECORD)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(row.map(LoginRecord::from))
    }

    async fn insert_vehicle(
        &self,
        owner_id: i64,
        vehicle: &NewVehicle,
    ) -> Result<VehicleRecord, SqlError> {
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        let updated = sqlx::query(Queries::IncrementFleetSize.get_query())
            .bind(owner_id)
            .execute(&mut *tx)
            .await
            .map_err(query_error)?;

        if updated.rows_affected() == 0 {
            return Err(SqlError::NotFound(OWNER_NOT_FOUND.to_string()));
        }

        let record: VehicleRecord = sqlx::query_as(Queries::InsertVehicle.get_query())
            .bind(&vehicle.make)
            .bind(&vehicle.model)
            .bind(vehicle.year)
            .bind(&vehicle.license_plate)
            .bind(VehicleStatus::Available.as_str())
            .bind(owner_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| unique_violation_or(e, LICENSE_PLATE_EXISTS))?;

        tx.commit().await.map_err(query_error)?;

        Ok(record)
    }

    async fn get_fleet_size(&self, owner_id: i64) -> Result<i32, SqlError> {
        let fleet_size: Option<i32> = sqlx::query_scalar(Queries::GetFleetSize.get_query())
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        fleet_size.ok_or_else(|| SqlError::NotFound(OWNER_NOT_FOUND.to_string()))
    }

    async fn query_owned_vehicles(
        &self,
        owner_id: i64,
        pagination: &Pagination,
    ) -> Result<PageResults<OwnedVehicleRecord>, SqlError> {
        let records: Vec<OwnedVehicleRecord> =
            sqlx::query_as(Queries::GetOwnedVehicles.get_query())
                .bind(owner_id)
                .bind(pagination.limit)
                .bind(pagination.offset())
                .fetch_all(&self.pool)
                .await
                .map_err(query_error)?;

        Ok(PageResults::from_records(records))
    }

    async fn query_vehicles(
        &self,
        pagination: &Pagination,
    ) -> Result<PageResults<VehicleSummaryRecord>, SqlError> {
        let records: Vec<VehicleSummaryRecord> = sqlx::query_as(Queries::GetVehicles.get_query())
            .bind(pagination.limit)
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(PageResults::from_records(records))
    }

    async fn query_drivers(
        &self,
        pagination: &Pagination,
    ) -> Result<PageResults<DriverRecord>, SqlError> {
        let records: Vec<DriverRecord> = sqlx::query_as(Queries::GetDrivers.get_query())
            .bind(pagination.limit)
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(PageResults::from_records(records))
    }

    async fn query_vehicle_owners(
        &self,
        pagination: &Pagination,
    ) -> Result<PageResults<VehicleOwnerRecord>, SqlError> {
        let records: Vec<VehicleOwnerRecord> =
            sqlx::query_as(Queries::GetVehicleOwners.get_query())
                .bind(pagination.limit)
                .bind(pagination.offset())
                .fetch_all(&self.pool)
                .await
                .map_err(query_error)?;

        Ok(PageResults::from_records(records))
    }

    async fn assign_driver(
        &self,
        owner_id: i64,
        vehicle_id: i64,
        driver_id: i64,
    ) -> Result<(), SqlError> {
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        // conditional update; a missing driver surfaces as a foreign key violation
        let vehicle_update = sqlx::query(Queries::AssignVehicleDriver.get_query())
            .bind(driver_id)
            .bind(vehicle_id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| foreign_key_violation_or(e, DRIVER_NOT_FOUND))?;

        if vehicle_update.rows_affected() == 0 {
            let status: Option<String> =
                sqlx::query_scalar(Queries::GetOwnedVehicleStatus.get_query())
                    .bind(vehicle_id)
                    .bind(owner_id)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(query_error)?;

            return Err(match status {
                None => SqlError::NotFound(VEHICLE_NOT_FOUND.to_string()),
                Some(_) => SqlError::Conflict(VEHICLE_NOT_AVAILABLE.to_string()),
            });
        }

        let driver_update = sqlx::query(Queries::MarkDriverAssigned.get_query())
            .bind(driver_id)
            .execute(&mut *tx)
            .await
            .map_err(query_error)?;

        if driver_update.rows_affected() == 0 {
            let assigned: Option<bool> = sqlx::query_scalar(Queries::GetDriverAssigned.get_query())
                .bind(driver_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(query_error)?;

            return Err(match assigned {
                None => SqlError::NotFound(DRIVER_NOT_FOUND.to_string()),
                Some(_) => SqlError::Conflict(DRIVER_ALREADY_ASSIGNED.to_string()),
            });
        }

        tx.commit().await.map_err(query_error)?;
        info!("Assigned driver {} to vehicle {}", driver_id, vehicle_id);

        Ok(())
    }
}
