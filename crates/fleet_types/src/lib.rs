pub mod enums;
pub mod pagination;

pub use enums::*;
pub use pagination::*;
