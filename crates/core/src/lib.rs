pub mod authorization;
pub mod card;
pub mod request;
pub mod result;
pub mod transaction;

pub use authorization::{ApprovalResult, AuthorizationResult, DeclineReason, SaleResult};
pub use card::{CreditCard, TokenizedCreditCard};
pub use request::TransactionRequest;
pub use result::{
    CaptureResult, CommunicationResult, CreditResult, ErrorCode, TransactionResult, VoidResult,
};
pub use transaction::Transaction;
