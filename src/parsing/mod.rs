pub mod error;
pub mod snapshot_parser;
