use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Observation document is not well-formed XML")]
    MalformedXml(#[from] roxmltree::Error),
}
