use serde::{Deserialize, Serialize};

use crate::result::{CaptureResult, CommunicationResult, ErrorCode, TransactionResult};

/// Outcome of an authorization attempt that reached the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalResult {
    Approved,
    Declined,
    /// Approved but held for manual review.
    Hold,
}

/// Why an authorization was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeclineReason {
    NoSpecificReason,
    ExpiredCard,
    InsufficientFunds,
    CvvMismatch,
    AvsMismatch,
    AvsAndCvvMismatch,
    MaxSaleExceeded,
    MinSaleNotMet,
    VelocityLimit,
    ManualReview,
    BlockedCreditCardNumber,
    BlockedCountry,
    BlockedIpAddress,
    BlockedEmail,
    FraudSuspected,
    CallIssuer,
    PickUpCard,
    StolenCard,
    LostCard,
}

/// Result of authorizing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResult {
    #[serde(flatten)]
    pub result: TransactionResult,

    /// Present whenever the gateway was reached.
    pub approval_result: Option<ApprovalResult>,

    /// Present only for declined authorizations.
    pub decline_reason: Option<DeclineReason>,

    /// Issuer approval code, present only for approved authorizations.
    pub approval_code: Option<String>,
}

impl AuthorizationResult {
    /// An approved authorization.
    #[must_use]
    pub fn approved(
        provider_id: impl Into<String>,
        provider_unique_id: impl Into<String>,
        approval_code: impl Into<String>,
    ) -> Self {
        Self {
            result: TransactionResult::success(provider_id, Some(provider_unique_id.into())),
            approval_result: Some(ApprovalResult::Approved),
            decline_reason: None,
            approval_code: Some(approval_code.into()),
        }
    }

    /// A declined authorization. The gateway was reached, so the
    /// communication result is a success.
    #[must_use]
    pub fn declined(
        provider_id: impl Into<String>,
        provider_unique_id: impl Into<String>,
        decline_reason: DeclineReason,
    ) -> Self {
        Self {
            result: TransactionResult::success(provider_id, Some(provider_unique_id.into())),
            approval_result: Some(ApprovalResult::Declined),
            decline_reason: Some(decline_reason),
            approval_code: None,
        }
    }

    /// An authorization that never received an answer from the gateway.
    #[must_use]
    pub fn error(
        provider_id: impl Into<String>,
        communication_result: CommunicationResult,
        error_code: ErrorCode,
    ) -> Self {
        Self {
            result: TransactionResult::error(provider_id, communication_result, error_code),
            approval_result: None,
            decline_reason: None,
            approval_code: None,
        }
    }

    pub fn provider_unique_id(&self) -> Option<&str> {
        self.result.provider_unique_id.as_deref()
    }

    pub fn is_approved(&self) -> bool {
        self.approval_result == Some(ApprovalResult::Approved)
    }
}

/// Result of a sale: an authorization immediately followed by a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleResult {
    pub authorization_result: AuthorizationResult,
    pub capture_result: CaptureResult,
}
