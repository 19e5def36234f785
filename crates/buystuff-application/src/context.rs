//! Application context wiring.
//!
//! The session and cart are process-wide shared mutable state. Rather than
//! ambient singletons, they live in an explicit [`AppContext`] built once at
//! startup and handed to every consumer; a store that has not been wired and
//! hydrated simply cannot be observed, because hydration happens inside the
//! store constructors called here and nowhere else.

use std::sync::Arc;

use anyhow::Context as AnyhowContext;
use buystuff_core::cart::CartStore;
use buystuff_core::session::{AuthSession, CredentialVerifier, StaticCredentials};
use buystuff_core::storage::KeyValueStorage;
use buystuff_infrastructure::FileStorage;

/// Shared state handed to every consumer of the engine.
pub struct AppContext {
    /// The authentication gate.
    pub auth: Arc<AuthSession>,
    /// The cart store.
    pub cart: Arc<CartStore>,
}

impl AppContext {
    /// Wires the shared instances over the given storage and verifier.
    ///
    /// Both stores hydrate here, exactly once. Call this once at process
    /// start and share the returned context.
    pub fn bootstrap(
        storage: Arc<dyn KeyValueStorage>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        tracing::info!("bootstrapping storefront state");
        let auth = Arc::new(AuthSession::new(storage.clone(), verifier));
        let cart = Arc::new(CartStore::new(storage));
        tracing::info!(
            authenticated = auth.is_authenticated(),
            cart_lines = cart.item_count(),
            "storefront state hydrated"
        );

        Self { auth, cart }
    }

    /// Bootstraps with the durable file store at its default platform
    /// location and the demo credential policy.
    pub fn bootstrap_default() -> anyhow::Result<Self> {
        let storage = FileStorage::at_default_location()
            .context("Failed to open the default store file")?;
        Ok(Self::bootstrap(
            Arc::new(storage),
            Arc::new(StaticCredentials::default()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buystuff_core::catalog::{self, MediaKind};
    use buystuff_core::storage::{KeyValueStorage, MemoryStorage, keys};

    fn bootstrap_over(storage: Arc<MemoryStorage>) -> AppContext {
        AppContext::bootstrap(storage, Arc::new(StaticCredentials::default()))
    }

    #[test]
    fn test_bootstrap_starts_empty_and_anonymous() {
        let ctx = bootstrap_over(Arc::new(MemoryStorage::new()));
        assert!(!ctx.auth.is_authenticated());
        assert_eq!(ctx.cart.item_count(), 0);
    }

    #[test]
    fn test_bootstrap_hydrates_both_stores() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let ctx = bootstrap_over(storage.clone());
            ctx.auth.login("admin", "123").unwrap();
            ctx.cart
                .add_item(&catalog::visual_catalog()[0], MediaKind::Visual)
                .unwrap();
        }

        let rehydrated = bootstrap_over(storage);
        assert!(rehydrated.auth.is_authenticated());
        assert_eq!(rehydrated.auth.identity().as_deref(), Some("admin"));
        assert_eq!(rehydrated.cart.item_count(), 1);
    }

    #[test]
    fn test_stores_share_one_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let ctx = bootstrap_over(storage.clone());

        ctx.auth.login("admin", "123").unwrap();
        ctx.cart
            .add_item(&catalog::print_catalog()[0], MediaKind::Print)
            .unwrap();

        assert!(storage.get(keys::AUTH_ACTIVE).is_some());
        assert!(storage.get(keys::CART_ITEMS).is_some());
    }
}
