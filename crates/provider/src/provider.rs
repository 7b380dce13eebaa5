use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use merchant_core::{
    AuthorizationResult, CaptureResult, CreditCard, CreditResult, SaleResult, TokenizedCreditCard,
    Transaction, TransactionRequest, VoidResult,
};

use crate::error::ProviderError;

/// The capability set every merchant services provider offers.
///
/// Transaction operations return `Ok` whenever a result record could be
/// produced, including gateway errors and declines; callers inspect the
/// record's communication and approval results. `Err` is reserved for
/// conditions where no record exists (unsupported operations, vault I/O
/// failures, bad configuration).
///
/// This trait is **not** object-safe because it uses native `async fn` methods.
/// If you need dynamic dispatch, use [`DynMerchantServicesProvider`] instead --
/// every `MerchantServicesProvider` automatically implements it via a blanket
/// implementation.
pub trait MerchantServicesProvider: Send + Sync {
    /// Returns the id this provider was configured with.
    fn provider_id(&self) -> &str;

    /// Authorize and capture in one step.
    fn sale(
        &self,
        request: &TransactionRequest,
        card: &CreditCard,
    ) -> impl Future<Output = Result<SaleResult, ProviderError>> + Send;

    /// Authorize a transaction for later capture.
    fn authorize(
        &self,
        request: &TransactionRequest,
        card: &CreditCard,
    ) -> impl Future<Output = Result<AuthorizationResult, ProviderError>> + Send;

    /// Capture a previously authorized transaction.
    fn capture(
        &self,
        authorization: &AuthorizationResult,
    ) -> impl Future<Output = Result<CaptureResult, ProviderError>> + Send;

    /// Void a previously authorized or captured transaction.
    fn void_transaction(
        &self,
        transaction: &Transaction,
    ) -> impl Future<Output = Result<VoidResult, ProviderError>> + Send;

    /// Credit (refund) an amount to a card.
    fn credit(
        &self,
        request: &TransactionRequest,
        card: &CreditCard,
    ) -> impl Future<Output = Result<CreditResult, ProviderError>> + Send;

    /// Whether this provider can store cards in its vault.
    fn can_store_credit_cards(&self) -> bool;

    /// Store a card in the provider's vault, returning the provider token.
    fn store_credit_card(
        &self,
        card: &CreditCard,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;

    /// Update the non-sensitive details of a stored card.
    fn update_credit_card(
        &self,
        card: &CreditCard,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Replace the number and expiration of a stored card.
    fn update_credit_card_number_and_expiration(
        &self,
        card: &CreditCard,
        card_number: &str,
        expiration_month: u8,
        expiration_year: u16,
        card_code: Option<&str>,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Replace the expiration of a stored card.
    fn update_credit_card_expiration(
        &self,
        card: &CreditCard,
        expiration_month: u8,
        expiration_year: u16,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Remove a card from the provider's vault.
    fn delete_credit_card(
        &self,
        card: &CreditCard,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Whether [`get_tokenized_credit_cards`](Self::get_tokenized_credit_cards)
    /// is supported.
    fn can_get_tokenized_credit_cards(&self) -> bool;

    /// Fetch the provider's view of the cards the merchant has persisted,
    /// keyed by provider token.
    fn get_tokenized_credit_cards(
        &self,
        persisted_cards: &HashMap<String, CreditCard>,
    ) -> impl Future<Output = Result<HashMap<String, TokenizedCreditCard>, ProviderError>> + Send;
}

/// Object-safe provider trait for use behind `Arc<dyn DynMerchantServicesProvider>`.
///
/// You generally should not implement this trait directly -- instead implement
/// [`MerchantServicesProvider`] and rely on the blanket implementation.
#[async_trait]
pub trait DynMerchantServicesProvider: Send + Sync {
    fn provider_id(&self) -> &str;

    async fn sale(
        &self,
        request: &TransactionRequest,
        card: &CreditCard,
    ) -> Result<SaleResult, ProviderError>;

    async fn authorize(
        &self,
        request: &TransactionRequest,
        card: &CreditCard,
    ) -> Result<AuthorizationResult, ProviderError>;

    async fn capture(
        &self,
        authorization: &AuthorizationResult,
    ) -> Result<CaptureResult, ProviderError>;

    async fn void_transaction(&self, transaction: &Transaction)
    -> Result<VoidResult, ProviderError>;

    async fn credit(
        &self,
        request: &TransactionRequest,
        card: &CreditCard,
    ) -> Result<CreditResult, ProviderError>;

    fn can_store_credit_cards(&self) -> bool;

    async fn store_credit_card(&self, card: &CreditCard) -> Result<String, ProviderError>;

    async fn update_credit_card(&self, card: &CreditCard) -> Result<(), ProviderError>;

    async fn update_credit_card_number_and_expiration(
        &self,
        card: &CreditCard,
        card_number: &str,
        expiration_month: u8,
        expiration_year: u16,
        card_code: Option<&str>,
    ) -> Result<(), ProviderError>;

    async fn update_credit_card_expiration(
        &self,
        card: &CreditCard,
        expiration_month: u8,
        expiration_year: u16,
    ) -> Result<(), ProviderError>;

    async fn delete_credit_card(&self, card: &CreditCard) -> Result<(), ProviderError>;

    fn can_get_tokenized_credit_cards(&self) -> bool;

    async fn get_tokenized_credit_cards(
        &self,
        persisted_cards: &HashMap<String, CreditCard>,
    ) -> Result<HashMap<String, TokenizedCreditCard>, ProviderError>;
}

/// Blanket implementation: any type that implements [`MerchantServicesProvider`]
/// also implements [`DynMerchantServicesProvider`].
#[async_trait]
impl<T: MerchantServicesProvider + Sync> DynMerchantServicesProvider for T {
    fn provider_id(&self) -> &str {
        MerchantServicesProvider::provider_id(self)
    }

    async fn sale(
        &self,
        request: &TransactionRequest,
        card: &CreditCard,
    ) -> Result<SaleResult, ProviderError> {
        MerchantServicesProvider::sale(self, request, card).await
    }

    async fn authorize(
        &self,
        request: &TransactionRequest,
        card: &CreditCard,
    ) -> Result<AuthorizationResult, ProviderError> {
        MerchantServicesProvider::authorize(self, request, card).await
    }

    async fn capture(
        &self,
        authorization: &AuthorizationResult,
    ) -> Result<CaptureResult, ProviderError> {
        MerchantServicesProvider::capture(self, authorization).await
    }

    async fn void_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<VoidResult, ProviderError> {
        MerchantServicesProvider::void_transaction(self, transaction).await
    }

    async fn credit(
        &self,
        request: &TransactionRequest,
        card: &CreditCard,
    ) -> Result<CreditResult, ProviderError> {
        MerchantServicesProvider::credit(self, request, card).await
    }

    fn can_store_credit_cards(&self) -> bool {
        MerchantServicesProvider::can_store_credit_cards(self)
    }

    async fn store_credit_card(&self, card: &CreditCard) -> Result<String, ProviderError> {
        MerchantServicesProvider::store_credit_card(self, card).await
    }

    async fn update_credit_card(&self, card: &CreditCard) -> Result<(), ProviderError> {
        MerchantServicesProvider::update_credit_card(self, card).await
    }

    async fn update_credit_card_number_and_expiration(
        &self,
        card: &CreditCard,
        card_number: &str,
        expiration_month: u8,
        expiration_year: u16,
        card_code: Option<&str>,
    ) -> Result<(), ProviderError> {
        MerchantServicesProvider::update_credit_card_number_and_expiration(
            self,
            card,
            card_number,
            expiration_month,
            expiration_year,
            card_code,
        )
        .await
    }

    async fn update_credit_card_expiration(
        &self,
        card: &CreditCard,
        expiration_month: u8,
        expiration_year: u16,
    ) -> Result<(), ProviderError> {
        MerchantServicesProvider::update_credit_card_expiration(
            self,
            card,
            expiration_month,
            expiration_year,
        )
        .await
    }

    async fn delete_credit_card(&self, card: &CreditCard) -> Result<(), ProviderError> {
        MerchantServicesProvider::delete_credit_card(self, card).await
    }

    fn can_get_tokenized_credit_cards(&self) -> bool {
        MerchantServicesProvider::can_get_tokenized_credit_cards(self)
    }

    async fn get_tokenized_credit_cards(
        &self,
        persisted_cards: &HashMap<String, CreditCard>,
    ) -> Result<HashMap<String, TokenizedCreditCard>, ProviderError> {
        MerchantServicesProvider::get_tokenized_credit_cards(self, persisted_cards).await
    }
}
