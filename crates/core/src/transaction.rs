use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::authorization::AuthorizationResult;
use crate::card::CreditCard;
use crate::request::TransactionRequest;
use crate::result::{CaptureResult, VoidResult};

/// A transaction that has been through authorization, kept for later
/// capture or void.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Id of the provider that authorized the transaction.
    pub provider_id: String,

    pub transaction_request: TransactionRequest,

    pub credit_card: CreditCard,

    pub authorization_time: DateTime<Utc>,

    pub authorization_result: AuthorizationResult,

    #[serde(default)]
    pub capture_result: Option<CaptureResult>,

    #[serde(default)]
    pub void_result: Option<VoidResult>,
}

impl Transaction {
    /// Record a transaction authorized now.
    #[must_use]
    pub fn new(
        transaction_request: TransactionRequest,
        credit_card: CreditCard,
        authorization_result: AuthorizationResult,
    ) -> Self {
        Self {
            provider_id: authorization_result.result.provider_id.clone(),
            transaction_request,
            credit_card,
            authorization_time: Utc::now(),
            authorization_result,
            capture_result: None,
            void_result: None,
        }
    }

    /// Attach the result of a capture.
    #[must_use]
    pub fn with_capture_result(mut self, capture_result: CaptureResult) -> Self {
        self.capture_result = Some(capture_result);
        self
    }

    /// Attach the result of a void.
    #[must_use]
    pub fn with_void_result(mut self, void_result: VoidResult) -> Self {
        self.void_result = Some(void_result);
        self
    }

    /// The provider-unique id assigned at authorization.
    pub fn provider_unique_id(&self) -> Option<&str> {
        self.authorization_result.provider_unique_id()
    }
}
