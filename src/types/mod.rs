pub mod field_record;
pub mod quality;
pub mod title;
