use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user can register with. Each maps to a row in the `roles` table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Driver,
    VehicleOwner,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Driver => "driver",
            Role::VehicleOwner => "vehicle_owner",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(input: &str) -> Result<Role, Self::Err> {
        match input {
            "driver" => Ok(Role::Driver),
            "vehicle_owner" => Ok(Role::VehicleOwner),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// Lifecycle state of a vehicle. Only `Available -> InUse` is driven by the api.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    InUse,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::InUse => "in_use",
            VehicleStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = ();

    fn from_str(input: &str) -> Result<VehicleStatus, Self::Err> {
        match input {
            "available" => Ok(VehicleStatus::Available),
            "in_use" => Ok(VehicleStatus::InUse),
            "maintenance" => Ok(VehicleStatus::Maintenance),
            _ => Err(()),
        }
    }
}
