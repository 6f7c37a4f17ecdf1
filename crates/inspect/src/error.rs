/// Error type for the Inspect module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The ABI or type expression could not be loaded
    #[error("ABI error: {0}")]
    AbiError(#[from] mxabi_types::Error),
}
