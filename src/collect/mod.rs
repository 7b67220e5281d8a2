pub mod collection;
pub mod document_collector;
pub mod error;
pub mod station_resolver;
