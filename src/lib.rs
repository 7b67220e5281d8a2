mod cleaning;
mod collect;
mod error;
mod ordering;
mod parsing;
mod remote;
mod render;
mod swob;
mod types;
mod utils;

#[cfg(test)]
mod test_support;

pub use error::SwobError;
pub use swob::*;

pub use types::field_record::{FieldRecord, Snapshot};
pub use types::quality::{QualityBucket, QualityCode, QA_NONE};
pub use types::title::{OrderedTitle, TitleEntry, TitleRegistry};

pub use cleaning::cleaning_map::{
    CleaningEntry, CleaningLoad, CleaningMap, CleaningSource, DEFAULT_CLEANING_FILE,
    DEFAULT_ORDER, DISABLED_MARKER,
};
pub use parsing::snapshot_parser::{ParsedDocument, SnapshotParser, QA_SUMMARY};

pub use remote::directory::{
    document_names, extract_links, station_names, DirectoryLister, HtmlDirectoryLister,
};
pub use remote::fetcher::{fetch_with_retry, Fetcher, HttpFetcher, FETCH_ATTEMPTS};

pub use collect::collection::{Collection, SkippedDocument};
pub use collect::document_collector::{DocumentCollector, DEFAULT_FETCH_CONCURRENCY};
pub use collect::station_resolver::{canonical_station_id, date_segment, StationResolver};

pub use ordering::{finalize_titles, order_results, order_row};

pub use render::csv_renderer::{try_write_csv, write_csv};
pub use render::frame::to_dataframe;
pub use render::spreadsheet::{
    layout_sheet, starter_offset, try_write_spreadsheet, write_spreadsheet, SheetCell,
};
pub use render::styles::{CellStyle, StyleTable};
pub use utils::today_utc;

pub use cleaning::error::CleaningMapError;
pub use collect::error::DocumentError;
pub use parsing::error::ParseError;
pub use remote::error::RemoteError;
pub use render::error::RenderError;
