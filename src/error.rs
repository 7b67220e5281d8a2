use crate::remote::error::RemoteError;
use crate::render::error::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwobError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
