#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("Inspect error: {0}")]
    InspectError(#[from] mxabi_core::mxabi_inspect::Error),
}
