pub mod base;
pub mod enums;
pub mod postgres;
pub mod queries;
pub mod schemas;
pub mod sqlite;

pub use base::SqlClient;
pub use enums::client::SqlClientEnum;
