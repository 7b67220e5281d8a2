use crate::ordering::order_row;
use crate::render::error::RenderError;
use crate::types::field_record::Snapshot;
use crate::types::title::OrderedTitle;
use polars::prelude::*;

/// Builds a `DataFrame` with one string column per title, named by its header.
///
/// Fields absent from a snapshot become empty strings, as in the delimited output.
pub fn to_dataframe(
    snapshots: &[Snapshot],
    titles: &[OrderedTitle],
) -> Result<DataFrame, RenderError> {
    let rows: Vec<Vec<String>> = snapshots
        .iter()
        .map(|snapshot| order_row(snapshot, titles))
        .collect();

    let columns: Vec<Column> = titles
        .iter()
        .enumerate()
        .map(|(index, title)| {
            let values: Vec<&str> = rows.iter().map(|row| row[index].as_str()).collect();
            Column::new(title.header().into(), values)
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}
