use crate::ordering::{finalize_titles, order_results};
use crate::render::error::RenderError;
use crate::types::field_record::Snapshot;
use crate::types::title::OrderedTitle;
use log::{info, warn};
use std::path::Path;

/// Writes a header row of finalized titles and one row per snapshot to `path`.
///
/// Every title becomes a column. An existing file is overwritten; a failed write may
/// leave a partial file behind.
pub fn try_write_csv(
    snapshots: &[Snapshot],
    titles: &[OrderedTitle],
    path: &Path,
) -> Result<(), RenderError> {
    let rows = order_results(snapshots, titles);
    let header = finalize_titles(titles);

    let mut writer =
        csv::Writer::from_path(path).map_err(|e| RenderError::Csv(path.to_path_buf(), e))?;
    writer
        .write_record(&header)
        .map_err(|e| RenderError::Csv(path.to_path_buf(), e))?;
    for row in &rows {
        writer
            .write_record(row)
            .map_err(|e| RenderError::Csv(path.to_path_buf(), e))?;
    }
    writer
        .flush()
        .map_err(|e| RenderError::Io(path.to_path_buf(), e))?;

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// [`try_write_csv`], reporting only whether it succeeded.
pub fn write_csv(snapshots: &[Snapshot], titles: &[OrderedTitle], path: &Path) -> bool {
    match try_write_csv(snapshots, titles, path) {
        Ok(()) => true,
        Err(e) => {
            warn!("{}", e);
            false
        }
    }
}
