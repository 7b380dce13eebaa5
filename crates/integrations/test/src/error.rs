use merchant_provider::ProviderError;
use thiserror::Error;

/// Errors specific to the test provider.
///
/// These get converted into [`ProviderError`] at the trait boundary.
#[derive(Debug, Error)]
pub enum TestProviderError {
    /// A configuration value could not be parsed or is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A card vault operation drew a simulated failure.
    #[error("Test-mode simulated {0} error")]
    SimulatedIo(&'static str),

    /// The operation has no test-mode implementation.
    #[error("{0} is not implemented by the test provider")]
    NotImplemented(&'static str),

    /// The operation is not supported by the test provider.
    #[error("{0} is not supported by the test provider")]
    Unsupported(&'static str),
}

impl From<TestProviderError> for ProviderError {
    fn from(err: TestProviderError) -> Self {
        let msg = err.to_string();
        match err {
            TestProviderError::InvalidArgument(_) => ProviderError::InvalidArgument(msg),
            TestProviderError::SimulatedIo(_) => ProviderError::Io(msg),
            TestProviderError::NotImplemented(_) => ProviderError::NotImplemented(msg),
            TestProviderError::Unsupported(_) => ProviderError::UnsupportedOperation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_io_maps_to_retryable_io() {
        let provider_err: ProviderError =
            TestProviderError::SimulatedIo("delete_credit_card").into();
        assert!(provider_err.is_retryable());
        assert!(matches!(provider_err, ProviderError::Io(_)));
    }

    #[test]
    fn invalid_argument_maps_to_non_retryable() {
        let provider_err: ProviderError = TestProviderError::InvalidArgument("x".into()).into();
        assert!(!provider_err.is_retryable());
        assert!(matches!(provider_err, ProviderError::InvalidArgument(_)));
    }

    #[test]
    fn not_implemented_and_unsupported_map_to_their_classes() {
        let err: ProviderError = TestProviderError::NotImplemented("credit").into();
        assert!(matches!(err, ProviderError::NotImplemented(_)));

        let err: ProviderError =
            TestProviderError::Unsupported("get_tokenized_credit_cards").into();
        assert!(matches!(err, ProviderError::UnsupportedOperation(_)));
    }

    #[test]
    fn error_display() {
        let err = TestProviderError::SimulatedIo("store_credit_card");
        assert_eq!(err.to_string(), "Test-mode simulated store_credit_card error");

        let err: ProviderError = TestProviderError::NotImplemented("credit").into();
        assert_eq!(
            err.to_string(),
            "not implemented: credit is not implemented by the test provider"
        );
    }
}
