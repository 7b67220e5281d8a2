//! Projects snapshots onto an ordered title list.
//!
//! These projections carry values only: units go into the header via
//! [`finalize_titles`], and quality flags are only used by the spreadsheet renderer.

use crate::types::field_record::Snapshot;
use crate::types::title::OrderedTitle;

/// Values of `snapshot`, positionally aligned to `titles`.
///
/// A field missing from the snapshot yields an empty string at its position.
///
/// ```
/// use swob::{order_row, FieldRecord, OrderedTitle, Snapshot};
///
/// let snapshot: Snapshot = [("temp".to_string(), FieldRecord::new("4.2", "C", 500))]
///     .into_iter()
///     .collect();
/// let titles = [OrderedTitle::new("press", 10, "hPa"), OrderedTitle::new("temp", 500, "C")];
///
/// assert_eq!(order_row(&snapshot, &titles), ["", "4.2"]);
/// ```
pub fn order_row(snapshot: &Snapshot, titles: &[OrderedTitle]) -> Vec<String> {
    titles
        .iter()
        .map(|title| snapshot.value(&title.name).unwrap_or_default().to_string())
        .collect()
}

/// [`order_row`] over every snapshot, keeping snapshot order.
pub fn order_results(snapshots: &[Snapshot], titles: &[OrderedTitle]) -> Vec<Vec<String>> {
    snapshots
        .iter()
        .map(|snapshot| order_row(snapshot, titles))
        .collect()
}

/// Header strings, `"<name> (<unit>)"`, one per title.
pub fn finalize_titles(titles: &[OrderedTitle]) -> Vec<String> {
    titles.iter().map(OrderedTitle::header).collect()
}
