use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::ProviderError;
use crate::provider::DynMerchantServicesProvider;

/// A registry that maps provider ids to their implementations.
///
/// Providers are stored behind `Arc<dyn DynMerchantServicesProvider>` so a
/// real gateway adapter and a test provider are interchangeable: whichever is
/// registered under an id is the one callers get. The registry is built once
/// at startup and then shared immutably.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn DynMerchantServicesProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider under its own provider id.
    ///
    /// If a provider with the same id already exists, it is replaced.
    pub fn register(&mut self, provider: Arc<dyn DynMerchantServicesProvider>) {
        let id = provider.provider_id().to_owned();
        if self.providers.insert(id.clone(), provider).is_some() {
            debug!(provider = %id, "replaced registered merchant services provider");
        }
    }

    /// Look up a provider by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn DynMerchantServicesProvider>> {
        self.providers.get(id).cloned()
    }

    /// Look up a provider by id, failing with [`ProviderError::NotFound`].
    pub fn require(
        &self,
        id: &str,
    ) -> Result<Arc<dyn DynMerchantServicesProvider>, ProviderError> {
        self.get(id).ok_or_else(|| ProviderError::NotFound(id.to_owned()))
    }

    /// Return a sorted list of all registered provider ids.
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
