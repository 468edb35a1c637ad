pub mod middleware;
pub mod permissions;
pub mod route;
pub mod schema;
