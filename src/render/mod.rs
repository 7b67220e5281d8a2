pub mod csv_renderer;
pub mod error;
pub mod frame;
pub mod spreadsheet;
pub mod styles;
