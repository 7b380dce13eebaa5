use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Outcome of the attempt to reach the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunicationResult {
    /// The gateway was reached and returned a response.
    Success,
    /// The request failed before leaving the local system.
    LocalError,
    /// A network or transport-level error occurred.
    IoError,
    /// The gateway was reached but reported an error.
    GatewayError,
}

impl CommunicationResult {
    pub fn is_error(self) -> bool {
        self != Self::Success
    }
}

/// Normalized error code describing why a transaction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Unknown,
    HashCheckFailed,
    VoiceAuthorizationRequired,
    InvalidCardNumber,
    InvalidExpirationDate,
    CardExpired,
    InvalidCardCode,
    InvalidAmount,
    InvalidCurrencyCode,
    InvalidTransactionId,
    DuplicateTransaction,
    TransactionNotFound,
    AlreadyCaptured,
    AlreadyVoided,
    AmountTooHigh,
    InvalidMerchantId,
    ProviderConfigurationError,
    AcceptedCurrencyRequired,
    CardTypeNotSupported,
    CustomerAccountDisabled,
    TransactionTimedOut,
    ApprovalCodeRequired,
    InvalidCustomerIp,
    RejectedByRiskFilter,
}

/// Fields shared by every provider result.
///
/// Prefer the named constructors over struct literals; they leave every field
/// that does not apply to the outcome set to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    /// Id of the provider that produced this result.
    pub provider_id: String,

    pub communication_result: CommunicationResult,

    /// Raw error code as reported by the gateway.
    pub provider_error_code: Option<String>,

    /// Normalized error code.
    pub error_code: Option<ErrorCode>,

    /// Raw error message as reported by the gateway.
    pub provider_error_message: Option<String>,

    /// Identifier of the transaction within the provider's namespace.
    pub provider_unique_id: Option<String>,
}

impl TransactionResult {
    /// A successful communication referencing `provider_unique_id`.
    #[must_use]
    pub fn success(provider_id: impl Into<String>, provider_unique_id: Option<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            communication_result: CommunicationResult::Success,
            provider_error_code: None,
            error_code: None,
            provider_error_message: None,
            provider_unique_id,
        }
    }

    /// A failed communication. Every field other than the communication
    /// result and error code is absent.
    #[must_use]
    pub fn error(
        provider_id: impl Into<String>,
        communication_result: CommunicationResult,
        error_code: ErrorCode,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            communication_result,
            provider_error_code: None,
            error_code: Some(error_code),
            provider_error_message: None,
            provider_unique_id: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.communication_result == CommunicationResult::Success
    }
}

macro_rules! transaction_result_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub TransactionResult);

        impl Deref for $name {
            type Target = TransactionResult;

            fn deref(&self) -> &TransactionResult {
                &self.0
            }
        }

        impl From<TransactionResult> for $name {
            fn from(result: TransactionResult) -> Self {
                Self(result)
            }
        }
    };
}

transaction_result_newtype!(
    /// Result of capturing a previously authorized transaction.
    CaptureResult
);

transaction_result_newtype!(
    /// Result of voiding a transaction.
    VoidResult
);

transaction_result_newtype!(
    /// Result of crediting (refunding) a card.
    CreditResult
);
