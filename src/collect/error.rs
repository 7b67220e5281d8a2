use crate::parsing::error::ParseError;
use crate::remote::error::RemoteError;
use thiserror::Error;

/// Why a document was left out of a collection.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Fetch(#[from] RemoteError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
