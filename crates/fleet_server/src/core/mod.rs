pub mod auth;
pub mod drivers;
pub mod error;
pub mod health;
pub mod owners;
pub mod router;
pub mod setup;
pub mod state;
pub mod vehicles;
