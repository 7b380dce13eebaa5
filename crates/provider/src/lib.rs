pub mod error;
pub mod provider;
pub mod registry;

pub use error::ProviderError;
pub use provider::{DynMerchantServicesProvider, MerchantServicesProvider};
pub use registry::ProviderRegistry;
