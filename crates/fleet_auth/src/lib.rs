pub mod auth;
pub mod password;
pub mod permission;
pub mod schema;

pub use auth::AuthManager;
pub use schema::Claims;
