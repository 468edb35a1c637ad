use axum::http::Method;
use fleet_auth::permission::{
    ADMIN_READ_DRIVER, ADMIN_READ_OWNER, ADMIN_READ_VEHICLE, OWNER_ASSIGN_DRIVER,
    OWNER_CREATE_VEHICLE, OWNER_READ_VEHICLE,
};

pub const VEHICLES_PATH: &str = "/vehicles";
pub const ASSIGN_DRIVER_PATH: &str = "/vehicles/:id/assign";
pub const OWNED_VEHICLES_PATH: &str = "/owned_vehicles";
pub const DRIVERS_PATH: &str = "/drivers";
pub const VEHICLE_OWNERS_PATH: &str = "/vehicle_owners";

/// Permission required by each protected route, keyed by method and route template
pub const ROUTE_PERMISSIONS: &[(Method, &str, &str)] = &[
    (Method::POST, VEHICLES_PATH, OWNER_CREATE_VEHICLE),
    (Method::POST, ASSIGN_DRIVER_PATH, OWNER_ASSIGN_DRIVER),
    (Method::GET, OWNED_VEHICLES_PATH, OWNER_READ_VEHICLE),
    (Method::GET, VEHICLES_PATH, ADMIN_READ_VEHICLE),
    (Method::GET, DRIVERS_PATH, ADMIN_READ_DRIVER),
    (Method::GET, VEHICLE_OWNERS_PATH, ADMIN_READ_OWNER),
];

/// HEAD is answered by GET handlers, so it needs the GET permission
pub fn required_permission(method: &Method, path: &str) -> Option<&'static str> {
    let head = *method == Method::HEAD;

    ROUTE_PERMISSIONS
        .iter()
        .find(|(m, p, _)| (m == method || (head && *m == Method::GET)) && *p == path)
        .map(|(_, _, permission)| *permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_permission() {
        assert_eq!(
            required_permission(&Method::POST, VEHICLES_PATH),
            Some(OWNER_CREATE_VEHICLE)
        );
        assert_eq!(
            required_permission(&Method::GET, VEHICLES_PATH),
            Some(ADMIN_READ_VEHICLE)
        );
        assert_eq!(
            required_permission(&Method::POST, ASSIGN_DRIVER_PATH),
            Some(OWNER_ASSIGN_DRIVER)
        );
        assert_eq!(
            required_permission(&Method::GET, DRIVERS_PATH),
            Some(ADMIN_READ_DRIVER)
        );

        // concrete paths never match, only route templates do
        assert_eq!(required_permission(&Method::POST, "/vehicles/1/assign"), None);
        assert_eq!(required_permission(&Method::DELETE, VEHICLES_PATH), None);
        assert_eq!(
            required_permission(&Method::HEAD, DRIVERS_PATH),
            Some(ADMIN_READ_DRIVER)
        );
        assert_eq!(
            required_permission(&Method::HEAD, VEHICLES_PATH),
            Some(ADMIN_READ_VEHICLE)
        );
        assert_eq!(required_permission(&Method::GET, "/healthcheck"), None);
    }

    #[test]
    fn test_every_route_has_a_distinct_entry() {
        for (i, (method, path, _)) in ROUTE_PERMISSIONS.iter().enumerate() {
            let duplicates = ROUTE_PERMISSIONS
                .iter()
                .skip(i + 1)
                .filter(|(m, p, _)| m == method && p == path)
                .count();
            assert_eq!(duplicates, 0, "{} {} listed twice", method, path);
        }
    }
}
