use crate::base::SqlClient;
use crate::postgres::client::PostgresClient;
use crate::schemas::schema::{
    DriverRecord, LoginRecord, NewUser, NewVehicle, OwnedVehicleRecord, PageResults,
    VehicleOwnerRecord, VehicleRecord, VehicleSummaryRecord,
};
use crate::sqlite::client::SqliteClient;
use async_trait::async_trait;
use fleet_error::SqlError;
use fleet_settings::{DatabaseSettings, SqlType};
use fleet_types::Pagination;

pub enum SqlClientEnum {
    Postgres(PostgresClient),
    Sqlite(SqliteClient),
}

impl SqlClientEnum {
    pub fn name(&self) -> &str {
        match self {
            SqlClientEnum::Postgres(_) => "postgres",
            SqlClientEnum::Sqlite(_) => "sqlite",
        }
    }
}

#[async_trait]
impl SqlClient for SqlClientEnum {
    async fn new(settings: &DatabaseSettings) -> Result<Self, SqlError> {
        match settings.sql_type {
            SqlType::Postgres => {
                let client = PostgresClient::new(settings).await?;
                Ok(SqlClientEnum::Postgres(client))
            }
            SqlType::Sqlite => {
                let client = SqliteClient::new(settings).await?;
                Ok(SqlClientEnum::Sqlite(client))
            }
        }
    }

    async fn run_migrations(&self) -> Result<(), SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => client.run_migrations().await,
            SqlClientEnum::Sqlite(client) => client.run_migrations().await,
        }
    }

    async fn insert_user(&self, user: &NewUser) -> Result<i64, SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => client.insert_user(user).await,
            SqlClientEnum::Sqlite(client) => client.insert_user(user).await,
        }
    }

    async fn get_login_record(&self, email: &str) -> Result<Option<LoginRecord>, SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => client.get_login_record(email).await,
            SqlClientEnum::Sqlite(client) => client.get_login_record(email).await,
        }
    }

    async fn insert_vehicle(
        &self,
        owner_id: i64,
        vehicle: &NewVehicle,
    ) -> Result<VehicleRecord, SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => client.insert_vehicle(owner_id, vehicle).await,
            SqlClientEnum::Sqlite(client) => client.insert_vehicle(owner_id, vehicle).await,
        }
    }

    async fn get_fleet_size(&self, owner_id: i64) -> Result<i32, SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => client.get_fleet_size(owner_id).await,
            SqlClientEnum::Sqlite(client) => client.get_fleet_size(owner_id).await,
        }
    }

    async fn query_owned_vehicles(
        &self,
        owner_id: i64,
        pagination: &Pagination,
    ) -> Result<PageResults<OwnedVehicleRecord>, SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => {
                client.query_owned_vehicles(owner_id, pagination).await
            }
            SqlClientEnum::Sqlite(client) => client.query_owned_vehicles(owner_id, pagination).await,
        }
    }

    async fn query_vehicles(
        &self,
        pagination: &Pagination,
    ) -> Result<PageResults<VehicleSummaryRecord>, SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => client.query_vehicles(pagination).await,
            SqlClientEnum::Sqlite(client) => client.query_vehicles(pagination).await,
        }
    }

    async fn query_drivers(
        &self,
        pagination: &Pagination,
    ) -> Result<PageResults<DriverRecord>, SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => client.query_drivers(pagination).await,
            SqlClientEnum::Sqlite(client) => client.query_drivers(pagination).await,
        }
    }

    async fn query_vehicle_owners(
        &self,
        pagination: &Pagination,
    ) -> Result<PageResults<VehicleOwnerRecord>, SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => client.query_vehicle_owners(pagination).await,
            SqlClientEnum::Sqlite(client) => client.query_vehicle_owners(pagination).await,
        }
    }

    async fn assign_driver(
        &self,
        owner_id: i64,
        vehicle_id: i64,
        driver_id: i64,
    ) -> Result<(), SqlError> {
        match self {
            SqlClientEnum::Postgres(client) => {
                client.assign_driver(owner_id, vehicle_id, driver_id).await
            }
            SqlClientEnum::Sqlite(client) => {
                client.assign_driver(owner_id, vehicle_id, driver_id).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sqlite_enum() {
        let settings = DatabaseSettings::new("sqlite::memory:", 1).unwrap();
        let client = SqlClientEnum::new(&settings).await.unwrap();

        assert_eq!(client.name(), "sqlite");
        assert!(client.get_login_record("missing@fleet.io").await.unwrap().is_none());
    }
}
