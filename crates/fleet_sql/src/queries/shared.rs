const INSERT_USER: &str = include_str!("scripts/insert_user.sql");
const INSERT_DRIVER: &str = include_str!("scripts/insert_driver.sql");
const INSERT_VEHICLE_OWNER: &str = include_str!("scripts/insert_vehicle_owner.sql");
const INCREMENT_FLEET_SIZE: &str = include_str!("scripts/increment_fleet_size.sql");
const INSERT_VEHICLE: &str = include_str!("scripts/insert_vehicle.sql");
const GET_FLEET_SIZE: &str = include_str!("scripts/get_fleet_size.sql");
const GET_OWNED_VEHICLES: &str = include_str!("scripts/get_owned_vehicles.sql");
const GET_VEHICLES: &str = include_str!("scripts/get_vehicles.sql");
const GET_DRIVERS: &str = include_str!("scripts/get_drivers.sql");
const GET_VEHICLE_OWNERS: &str = include_str!("scripts/get_vehicle_owners.sql");
const ASSIGN_VEHICLE_DRIVER: &str = include_str!("scripts/assign_vehicle_driver.sql");
const MARK_DRIVER_ASSIGNED: &str = include_str!("scripts/mark_driver_assigned.sql");
const GET_OWNED_VEHICLE_STATUS: &str = include_str!("scripts/get_owned_vehicle_status.sql");
const GET_DRIVER_ASSIGNED: &str = include_str!("scripts/get_driver_assigned.sql");

/// Queries whose sql is identical across the supported backends
pub enum Queries {
    InsertUser,
    InsertDriver,
    InsertVehicleOwner,
    IncrementFleetSize,
    InsertVehicle,
    GetFleetSize,
    GetOwnedVehicles,
    GetVehicles,
    GetDrivers,
    GetVehicleOwners,
    AssignVehicleDriver,
    MarkDriverAssigned,
    GetOwnedVehicleStatus,
    GetDriverAssigned,
}

impl Queries {
    pub fn get_query(&self) -> &'static str {
        match self {
            Queries::InsertUser => INSERT_USER,
            Queries::InsertDriver => INSERT_DRIVER,
            Queries::InsertVehicleOwner => INSERT_VEHICLE_OWNER,
            Queries::IncrementFleetSize => INCREMENT_FLEET_SIZE,
            Queries::InsertVehicle => INSERT_VEHICLE,
            Queries::GetFleetSize => GET_FLEET_SIZE,
            Queries::GetOwnedVehicles => GET_OWNED_VEHICLES,
            Queries::GetVehicles => GET_VEHICLES,
            Queries::GetDrivers => GET_DRIVERS,
            Queries::GetVehicleOwners => GET_VEHICLE_OWNERS,
            Queries::AssignVehicleDriver => ASSIGN_VEHICLE_DRIVER,
            Queries::MarkDriverAssigned => MARK_DRIVER_ASSIGNED,
            Queries::GetOwnedVehicleStatus => GET_OWNED_VEHICLE_STATUS,
            Queries::GetDriverAssigned => GET_DRIVER_ASSIGNED,
        }
    }
}
