pub mod cleaning_map;
pub mod error;
