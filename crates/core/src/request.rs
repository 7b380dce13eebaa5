use serde::{Deserialize, Serialize};

/// A purchase submitted to a merchant services provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Amount in minor currency units (e.g. cents).
    pub amount: i64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Merchant order number.
    pub order_number: String,

    /// When set, real gateways run the transaction in their sandbox.
    #[serde(default)]
    pub test_mode: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub invoice_number: Option<String>,

    /// IP address of the customer placing the order.
    #[serde(default)]
    pub customer_ip: Option<String>,
}

impl TransactionRequest {
    /// Create a request for the given amount, currency and order number.
    #[must_use]
    pub fn new(amount: i64, currency: impl Into<String>, order_number: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            order_number: order_number.into(),
            test_mode: false,
            description: None,
            invoice_number: None,
            customer_ip: None,
        }
    }

    /// Mark the request as a test-mode transaction.
    #[must_use]
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = Some(invoice_number.into());
        self
    }

    #[must_use]
    pub fn with_customer_ip(mut self, ip: impl Into<String>) -> Self {
        self.customer_ip = Some(ip.into());
        self
    }
}
