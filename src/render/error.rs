use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to write delimited text to '{0}'")]
    Csv(PathBuf, #[source] csv::Error),

    #[error("Failed to write spreadsheet '{0}'")]
    Spreadsheet(PathBuf, #[source] rust_xlsxwriter::XlsxError),

    #[error("Cell at row {row}, column {col} is outside the worksheet")]
    CellOutOfRange { row: usize, col: usize },

    #[error("Failed building DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}
