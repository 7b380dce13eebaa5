use thiserror::Error;

/// Errors raised by merchant services providers.
///
/// Gateway-level failures of a transaction (errors and declines) are not
/// errors here; they are reported inside the result records. These variants
/// cover conditions where no result can be produced at all.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The requested provider was not found in the registry.
    #[error("provider not found: {0}")]
    NotFound(String),

    /// The provider was constructed with an invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A card vault or network operation failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The operation exists in the interface but this provider has no
    /// implementation for it.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// The provider does not support the operation at all.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl ProviderError {
    /// Returns `true` if the error is transient and the operation may succeed
    /// on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
