//! The result of a collection run: parsed snapshots, their ordered titles, and what
//! had to be left out along the way.

use crate::collect::error::DocumentError;
use crate::ordering::{finalize_titles, order_results};
use crate::render::csv_renderer::write_csv;
use crate::render::frame::to_dataframe;
use crate::render::spreadsheet::write_spreadsheet;
use crate::types::field_record::Snapshot;
use crate::types::title::OrderedTitle;
use crate::SwobError;
use polars::prelude::DataFrame;
use std::path::Path;

/// A document that could not be fetched or parsed, and was therefore skipped.
#[derive(Debug)]
pub struct SkippedDocument {
    /// Address of the document, relative to the directory it was listed in.
    pub address: String,
    pub error: DocumentError,
}

/// Snapshots collected for one station/date (or several stations of one date),
/// in the order their documents were listed.
#[derive(Debug, Default)]
pub struct Collection {
    pub snapshots: Vec<Snapshot>,
    /// Titles of every field seen during the run, sorted by priority.
    pub titles: Vec<OrderedTitle>,
    /// Documents that were dropped after failing to fetch or parse.
    pub skipped: Vec<SkippedDocument>,
    /// `qa_summary` markers that had no field to qualify.
    pub orphan_markers: usize,
    /// Whether the snapshots come from more than one station.
    pub multi_station: bool,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// `true` when no listed document was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Header strings for every title, `"<name> (<unit>)"`.
    pub fn headers(&self) -> Vec<String> {
        finalize_titles(&self.titles)
    }

    /// One row of values per snapshot, aligned to [`Self::headers`].
    pub fn rows(&self) -> Vec<Vec<String>> {
        order_results(&self.snapshots, &self.titles)
    }

    /// Writes every title and snapshot as delimited text. Returns `false` on failure.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> bool {
        write_csv(&self.snapshots, &self.titles, path.as_ref())
    }

    /// Writes a quality-styled spreadsheet. Returns `false` on failure.
    pub fn write_spreadsheet(&self, path: impl AsRef<Path>) -> bool {
        write_spreadsheet(
            &self.snapshots,
            &self.titles,
            path.as_ref(),
            self.multi_station,
        )
    }

    /// The collection as a Polars `DataFrame` with one string column per header.
    pub fn to_dataframe(&self) -> Result<DataFrame, SwobError> {
        Ok(to_dataframe(&self.snapshots, &self.titles)?)
    }
}
