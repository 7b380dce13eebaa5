use serde::{Deserialize, Serialize};

/// A payment card as submitted by the merchant.
///
/// The `Debug` implementation never prints the full card number or the card
/// code, so a card can safely appear in logs and panic messages.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Identifier assigned by the merchant's own persistence layer.
    pub persistence_unique_id: Option<String>,

    /// Token assigned by the provider once the card has been stored.
    pub provider_unique_id: Option<String>,

    /// Primary account number, digits only.
    pub card_number: String,

    /// Expiration month, `1..=12`.
    pub expiration_month: u8,

    /// Four-digit expiration year.
    pub expiration_year: u16,

    /// Card verification code (CVV2/CVC2/CID).
    pub card_code: Option<String>,

    pub first_name: String,
    pub last_name: String,

    #[serde(default)]
    pub email: Option<String>,
}

impl std::fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditCard")
            .field("persistence_unique_id", &self.persistence_unique_id)
            .field("provider_unique_id", &self.provider_unique_id)
            .field("card_number", &self.masked_card_number())
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .field("card_code", &self.card_code.as_ref().map(|_| "[REDACTED]"))
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish()
    }
}

impl CreditCard {
    /// Create a card with the required fields. Optional fields start empty.
    #[must_use]
    pub fn new(
        card_number: impl Into<String>,
        expiration_month: u8,
        expiration_year: u16,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            persistence_unique_id: None,
            provider_unique_id: None,
            card_number: card_number.into(),
            expiration_month,
            expiration_year,
            card_code: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
        }
    }

    /// Set the card verification code.
    #[must_use]
    pub fn with_card_code(mut self, code: impl Into<String>) -> Self {
        self.card_code = Some(code.into());
        self
    }

    /// Set the merchant-side persistence identifier.
    #[must_use]
    pub fn with_persistence_unique_id(mut self, id: impl Into<String>) -> Self {
        self.persistence_unique_id = Some(id.into());
        self
    }

    /// Set the provider-side stored-card token.
    #[must_use]
    pub fn with_provider_unique_id(mut self, id: impl Into<String>) -> Self {
        self.provider_unique_id = Some(id.into());
        self
    }

    /// Set the cardholder e-mail address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The card number with every digit except the last four replaced by `X`.
    pub fn masked_card_number(&self) -> String {
        let len = self.card_number.chars().count();
        let visible = len.saturating_sub(4);
        self.card_number
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible { 'X' } else { c })
            .collect()
    }
}

/// A card as known to the provider's vault, referenced by its token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedCreditCard {
    /// Provider token for the stored card.
    pub provider_unique_id: String,

    /// Masked card number as reported by the provider.
    pub masked_card_number: String,

    pub expiration_month: u8,
    pub expiration_year: u16,
}
