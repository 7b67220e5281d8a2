//! Renders a collection as a spreadsheet whose cells are coloured by quality.
//!
//! Sheet layout:
//!
//! * row 0: the identity header (`Station Name`/`TC ID` of the first snapshot, or
//!   `Multiple Stations`) and the quality legend in columns 7 to 13,
//! * row 2: `Date & Time`, a reserved blank column, then one title per field,
//! * row 3 onward: one row per snapshot.
//!
//! Identity fields are written through the dedicated columns instead of the generic
//! field columns. Generic columns start at the [`starter_offset`]: the position just
//! after the `Station Name` title (two earlier for multi-station sheets, so station
//! name and TC ID stay visible per row). Without a `Station Name` title, i.e. when
//! cleaning was disabled, the offset is past the last title and only the date/time
//! columns are written.

use crate::render::error::RenderError;
use crate::render::styles::{CellStyle, StyleTable};
use crate::types::field_record::Snapshot;
use crate::types::quality::QualityBucket;
use crate::types::title::OrderedTitle;
use log::{debug, info, warn};
use rust_xlsxwriter::Workbook;
use std::path::Path;

const STATION_NAME: &str = "Station Name";
const TC_ID: &str = "TC ID";
const DATE_TM: &str = "date_tm";
const SHEET_NAME: &str = "Sheet 1";

const TITLE_ROW: usize = 2;
const FIRST_DATA_ROW: usize = 3;
const FIRST_FIELD_COL: usize = 2;
const LEGEND_COL: usize = 7;
const TIMESTAMP_WIDTH: usize = 16;

/// One cell to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCell {
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub style: CellStyle,
}

impl SheetCell {
    fn new(row: usize, col: usize, text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            row,
            col,
            text: text.into(),
            style,
        }
    }
}

/// Index of the first title rendered through the generic field columns.
///
/// Counts the titles up to and including `Station Name`, minus two when rendering
/// several stations. Equals `titles.len()` if there is no `Station Name` title.
pub fn starter_offset(titles: &[OrderedTitle], multi_station: bool) -> usize {
    match titles.iter().position(|title| title.name == STATION_NAME) {
        Some(index) if multi_station => (index + 1).saturating_sub(2),
        Some(index) => index + 1,
        None => titles.len(),
    }
}

/// Formats a `date_tm` value as `YYYY-MM-DD HH:MMZ`.
fn timestamp(date_tm: &str) -> String {
    let truncated: String = date_tm.chars().take(TIMESTAMP_WIDTH).collect();
    format!("{}Z", truncated.replace('T', " "))
}

/// Every cell of the sheet, in writing order.
pub fn layout_sheet(
    snapshots: &[Snapshot],
    titles: &[OrderedTitle],
    multi_station: bool,
) -> Vec<SheetCell> {
    let plain = CellStyle::Quality(QualityBucket::Unassessed);
    let mut cells = Vec::new();

    if multi_station {
        cells.push(SheetCell::new(0, 0, "Multiple Stations", CellStyle::Header));
    } else {
        let first = snapshots.first();
        let identity = |name: &str| {
            first
                .and_then(|snapshot| snapshot.value(name))
                .unwrap_or_default()
                .to_string()
        };
        cells.push(SheetCell::new(0, 0, STATION_NAME, CellStyle::Header));
        cells.push(SheetCell::new(0, 2, identity(STATION_NAME), plain));
        cells.push(SheetCell::new(0, 4, TC_ID, CellStyle::Header));
        cells.push(SheetCell::new(0, 5, identity(TC_ID), plain));
    }

    cells.push(SheetCell::new(0, LEGEND_COL, "Qualifiers", CellStyle::Header));
    for (index, bucket) in QualityBucket::LEGEND.iter().enumerate() {
        cells.push(SheetCell::new(
            0,
            LEGEND_COL + 1 + index,
            bucket.label(),
            CellStyle::Quality(*bucket),
        ));
    }

    let offset = starter_offset(titles, multi_station);
    let field_titles = titles.get(offset..).unwrap_or_default();

    cells.push(SheetCell::new(TITLE_ROW, 0, "Date & Time", CellStyle::Header));
    cells.push(SheetCell::new(TITLE_ROW, 1, "", CellStyle::Header));
    for (index, title) in field_titles.iter().enumerate() {
        cells.push(SheetCell::new(
            TITLE_ROW,
            FIRST_FIELD_COL + index,
            title.header(),
            CellStyle::Header,
        ));
    }

    for (line, snapshot) in snapshots.iter().enumerate() {
        let row = FIRST_DATA_ROW + line;
        let time = snapshot.value(DATE_TM).map(timestamp).unwrap_or_default();
        cells.push(SheetCell::new(row, 0, time, plain));
        cells.push(SheetCell::new(row, 1, "", plain));

        for (index, title) in field_titles.iter().enumerate() {
            let col = FIRST_FIELD_COL + index;
            let cell = match snapshot.get(&title.name) {
                Some(record) => {
                    let bucket = record.quality.bucket().unwrap_or_else(|| {
                        debug!(
                            "Unknown quality code '{}' for {}, rendering unstyled",
                            record.quality, title.name
                        );
                        QualityBucket::Unassessed
                    });
                    SheetCell::new(row, col, record.value.as_str(), CellStyle::Quality(bucket))
                }
                None => SheetCell::new(row, col, "", CellStyle::Quality(QualityBucket::Missing)),
            };
            cells.push(cell);
        }
    }

    cells
}

/// Writes the quality-styled sheet to `path`, overwriting any existing file.
pub fn try_write_spreadsheet(
    snapshots: &[Snapshot],
    titles: &[OrderedTitle],
    path: &Path,
    multi_station: bool,
) -> Result<(), RenderError> {
    let styles = StyleTable::new();
    let cells = layout_sheet(snapshots, titles, multi_station);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| RenderError::Spreadsheet(path.to_path_buf(), e))?;

    for cell in &cells {
        let out_of_range = || RenderError::CellOutOfRange {
            row: cell.row,
            col: cell.col,
        };
        let row = u32::try_from(cell.row).map_err(|_| out_of_range())?;
        let col = u16::try_from(cell.col).map_err(|_| out_of_range())?;
        worksheet
            .write_string_with_format(row, col, cell.text.as_str(), styles.format(cell.style))
            .map_err(|e| RenderError::Spreadsheet(path.to_path_buf(), e))?;
    }

    workbook
        .save(path)
        .map_err(|e| RenderError::Spreadsheet(path.to_path_buf(), e))?;
    info!(
        "Wrote {} rows to spreadsheet {}",
        snapshots.len(),
        path.display()
    );
    Ok(())
}

/// [`try_write_spreadsheet`], reporting only whether it succeeded.
pub fn write_spreadsheet(
    snapshots: &[Snapshot],
    titles: &[OrderedTitle],
    path: &Path,
    multi_station: bool,
) -> bool {
    match try_write_spreadsheet(snapshots, titles, path, multi_station) {
        Ok(()) => true,
        Err(e) => {
            warn!("{}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::cleaning_map::{CleaningMap, DEFAULT_ORDER};
    use crate::parsing::snapshot_parser::SnapshotParser;
    use crate::test_support::{element, identity, qualified_element, swob_document};
    use crate::types::title::TitleRegistry;

    fn cell_at(cells: &[SheetCell], row: usize, col: usize) -> Option<&SheetCell> {
        cells.iter().find(|cell| cell.row == row && cell.col == col)
    }

    fn row_texts(cells: &[SheetCell], row: usize) -> Vec<&str> {
        let mut row_cells: Vec<&SheetCell> = cells.iter().filter(|cell| cell.row == row).collect();
        row_cells.sort_by_key(|cell| cell.col);
        row_cells.iter().map(|cell| cell.text.as_str()).collect()
    }

    /// Two hourly documents of one station: `temp` flagged missing in the first,
    /// `rel_hum` only present in the second.
    fn parsed(cleaning: &CleaningMap) -> (Vec<Snapshot>, Vec<OrderedTitle>) {
        let mut first = identity("SUMMERLAND", "VSL", "2014-01-01T00:00:00.000Z");
        first.push(qualified_element("temp", "-2.1", "C", "-1"));
        let mut second = identity("SUMMERLAND", "VSL", "2014-01-01T01:00:00.000Z");
        second.push(qualified_element("temp", "-2.6", "C", "100"));
        second.push(element("rel_hum", "87", "%"));

        let parser = SnapshotParser::new(cleaning, DEFAULT_ORDER);
        let mut registry = TitleRegistry::new();
        let snapshots = [first, second]
            .iter()
            .map(|elements| {
                parser
                    .parse(&swob_document(elements), &mut registry)
                    .unwrap()
                    .snapshot
            })
            .collect();
        (snapshots, registry.ordered_titles())
    }

    #[test]
    fn test_starter_offset() {
        let titles: Vec<OrderedTitle> = ["lat", "long", "date_tm", "TC ID", "Station Name", "temp"]
            .iter()
            .map(|name| OrderedTitle::new(*name, 0, ""))
            .collect();

        assert_eq!(starter_offset(&titles, false), 5);
        assert_eq!(starter_offset(&titles, true), 3);
        assert_eq!(starter_offset(&titles[..2], false), 2);
        assert_eq!(starter_offset(&titles[4..5], true), 0);
    }

    #[test]
    fn test_timestamp_truncation() {
        assert_eq!(timestamp("2014-01-01T00:00:00.000Z"), "2014-01-01 00:00Z");
        assert_eq!(timestamp("2014-01-01"), "2014-01-01Z");
    }

    #[test]
    fn test_layout_with_cleaning_enabled() {
        let (snapshots, titles) = parsed(&CleaningMap::enabled_with([]));
        let cells = layout_sheet(&snapshots, &titles, false);

        assert_eq!(
            row_texts(&cells, 0),
            [
                "Station Name",
                "SUMMERLAND",
                "TC ID",
                "VSL",
                "Qualifiers",
                "Suppressed",
                "Missing",
                "Error",
                "Doubtful",
                "Suspect/Warning",
                "Acceptable/Passed"
            ]
        );
        // Identity fields are not repeated in the field columns.
        assert_eq!(
            row_texts(&cells, 2),
            ["Date & Time", "", "temp (C)", "rel_hum (%)"]
        );
        assert_eq!(
            row_texts(&cells, 3),
            ["2014-01-01 00:00Z", "", "-2.1", ""]
        );
        assert_eq!(
            row_texts(&cells, 4),
            ["2014-01-01 01:00Z", "", "-2.6", "87"]
        );

        let flagged = cell_at(&cells, 3, 2).unwrap();
        assert_eq!(flagged.style, CellStyle::Quality(QualityBucket::Missing));
        let passed = cell_at(&cells, 4, 2).unwrap();
        assert_eq!(passed.style, CellStyle::Quality(QualityBucket::Acceptable));
        let absent = cell_at(&cells, 3, 3).unwrap();
        assert_eq!(absent.style, CellStyle::Quality(QualityBucket::Missing));
        let unqualified = cell_at(&cells, 4, 3).unwrap();
        assert_eq!(unqualified.style, CellStyle::Quality(QualityBucket::Unassessed));
    }

    #[test]
    fn test_layout_with_cleaning_disabled() {
        let (snapshots, titles) = parsed(&CleaningMap::disabled());
        let cells = layout_sheet(&snapshots, &titles, false);

        // Raw identity names never match the display names the header looks for.
        assert_eq!(cell_at(&cells, 0, 2).unwrap().text, "");
        assert_eq!(cell_at(&cells, 0, 5).unwrap().text, "");
        // No `Station Name` title: only the date/time columns are rendered.
        assert_eq!(row_texts(&cells, 2), ["Date & Time", ""]);
        assert_eq!(row_texts(&cells, 3), ["2014-01-01 00:00Z", ""]);
        assert_eq!(row_texts(&cells, 4), ["2014-01-01 01:00Z", ""]);
    }

    #[test]
    fn test_layout_multi_station() {
        let (snapshots, titles) = parsed(&CleaningMap::enabled_with([]));
        let cells = layout_sheet(&snapshots, &titles, true);

        assert_eq!(cell_at(&cells, 0, 0).unwrap().text, "Multiple Stations");
        assert!(cell_at(&cells, 0, 2).is_none());
        assert_eq!(
            row_texts(&cells, 2),
            [
                "Date & Time",
                "",
                "TC ID (unitless)",
                "Station Name (unitless)",
                "temp (C)",
                "rel_hum (%)"
            ]
        );
        assert_eq!(
            row_texts(&cells, 3),
            ["2014-01-01 00:00Z", "", "VSL", "SUMMERLAND", "-2.1", ""]
        );
    }

    #[test]
    fn test_layout_without_snapshots() {
        let cells = layout_sheet(&[], &[], false);

        assert_eq!(cell_at(&cells, 0, 2).unwrap().text, "");
        assert_eq!(row_texts(&cells, 2), ["Date & Time", ""]);
        assert!(cells.iter().all(|cell| cell.row <= TITLE_ROW));
    }

    #[test]
    fn test_write_spreadsheet() {
        let (snapshots, titles) = parsed(&CleaningMap::enabled_with([]));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.xlsx");

        assert!(write_spreadsheet(&snapshots, &titles, &path, false));
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_unwritable_destination_reports_failure() {
        let (snapshots, titles) = parsed(&CleaningMap::enabled_with([]));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.xlsx");

        assert!(!write_spreadsheet(&snapshots, &titles, &path, false));
    }
}
