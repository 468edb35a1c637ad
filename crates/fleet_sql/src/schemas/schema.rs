use fleet_types::Role;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user about to be registered, with its role specific profile data
#[derive(Debug, Clone)]
pub struct NewUser {
    pub fullname: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub license_id: Option<String>,
}

/// Everything login needs in one row: identity, hash, role and the role's permissions
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRecord {
    pub user_id: i64,
    pub password_hash: String,
    pub role: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct VehicleRecord {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub status: String,
    pub driver_id: Option<i64>,
    pub owner_id: Option<i64>,
}

/// Vehicle row as seen by its owner
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OwnedVehicleRecord {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub status: String,
    pub driver_name: Option<String>,
    pub driver_email: Option<String>,
    #[serde(skip)]
    pub total_rows: i64,
}

/// Vehicle row as seen by an admin
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleSummaryRecord {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub status: String,
    pub driver_name: Option<String>,
    pub driver_email: Option<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    #[serde(skip)]
    pub total_rows: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DriverRecord {
    pub user_id: i64,
    pub fullname: String,
    pub email: String,
    pub license_id: String,
    pub assigned: bool,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<i32>,
    pub vehicle_license_plate: Option<String>,
    #[serde(skip)]
    pub total_rows: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleOwnerRecord {
    pub user_id: i64,
    pub fullname: String,
    pub email: String,
    pub fleet_size: i32,
    #[serde(skip)]
    pub total_rows: i64,
}

/// Rows carrying the `COUNT(*) OVER ()` window total
pub trait WindowTotal {
    fn total_rows(&self) -> i64;
}

macro_rules! impl_window_total {
    ($($record:ty),*) => {
        $(
            impl WindowTotal for $record {
                fn total_rows(&self) -> i64 {
                    self.total_rows
                }
            }
        )*
    };
}

impl_window_total!(
    OwnedVehicleRecord,
    VehicleSummaryRecord,
    DriverRecord,
    VehicleOwnerRecord
);

/// One page of records plus the unpaged row count
#[derive(Debug, Clone)]
pub struct PageResults<T> {
    pub records: Vec<T>,
    pub total_rows: i64,
}

impl<T: WindowTotal> PageResults<T> {
    /// Every row carries the same window total, so the first one is enough.
    /// An empty page (including one past the end) reports zero.
    pub fn from_records(records: Vec<T>) -> Self {
        let total_rows = records.first().map(|r| r.total_rows()).unwrap_or(0);
        PageResults {
            records,
            total_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(user_id: i64, total_rows: i64) -> VehicleOwnerRecord {
        VehicleOwnerRecord {
            user_id,
            fullname: format!("Owner {}", user_id),
            email: format!("owner{}@fleet.io", user_id),
            fleet_size: 0,
            total_rows,
        }
    }

    #[test]
    fn test_page_results_total() {
        let page = PageResults::from_records(vec![owner(1, 12), owner(2, 12)]);
        assert_eq!(page.total_rows, 12);
        assert_eq!(page.records.len(), 2);

        let empty: PageResults<VehicleOwnerRecord> = PageResults::from_records(vec![]);
        assert_eq!(empty.total_rows, 0);
    }

    #[test]
    fn test_window_total_not_serialized() {
        let value = serde_json::to_value(owner(1, 5)).unwrap();
        assert!(value.get("total_rows").is_none());
        assert_eq!(value["fleet_size"], 0);
    }
}
