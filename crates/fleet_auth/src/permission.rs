use crate::schema::Claims;

pub const OWNER_CREATE_VEHICLE: &str = "owner:create.vehicle";
pub const OWNER_READ_VEHICLE: &str = "owner:read.vehicle";
pub const OWNER_ASSIGN_DRIVER: &str = "owner:assign.driver";
pub const ADMIN_READ_VEHICLE: &str = "admin:read.vehicle";
pub const ADMIN_READ_DRIVER: &str = "admin:read.driver";
pub const ADMIN_READ_OWNER: &str = "admin:read.owner";

/// Exact string membership, no wildcards or prefixes
pub fn has_permission(claims: &Claims, permission: &str) -> bool {
    claims.permissions.iter().any(|p| p == permission)
}
