//! End-to-end reload simulation over a real store file.
//!
//! Each bootstrap over the same directory plays the role of one page load:
//! state written by a previous "load" must come back, and a confirmed
//! purchase or a logout must stay gone.

use std::sync::Arc;

use buystuff_application::{AppContext, CheckoutService};
use buystuff_core::catalog::{self, MediaKind};
use buystuff_core::session::StaticCredentials;
use buystuff_infrastructure::FileStorage;
use tempfile::TempDir;

fn load_app(dir: &TempDir) -> AppContext {
    let storage = FileStorage::open(dir.path().join("store.toml")).unwrap();
    AppContext::bootstrap(Arc::new(storage), Arc::new(StaticCredentials::default()))
}

#[test]
fn test_full_storefront_cycle_across_reloads() {
    let dir = TempDir::new().unwrap();

    // First load: sign in and pick two items.
    let (first_id, second_id) = {
        let app = load_app(&dir);
        assert!(!app.auth.is_authenticated());
        assert!(app.auth.login("admin", "123").unwrap());

        let first = app
            .cart
            .add_item(&catalog::visual_catalog()[0], MediaKind::Visual)
            .unwrap();
        let second = app
            .cart
            .add_item(&catalog::print_catalog()[2], MediaKind::Print)
            .unwrap();
        (first.cart_id, second.cart_id)
    };

    // Second load: everything is back, in order; confirm the purchase.
    {
        let app = load_app(&dir);
        assert!(app.auth.is_authenticated());
        assert_eq!(app.auth.identity().as_deref(), Some("admin"));

        let entries = app.cart.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].cart_id, first_id);
        assert_eq!(entries[1].cart_id, second_id);

        let summary = CheckoutService::from_context(&app).checkout().unwrap();
        assert_eq!(summary.item_count, 2);
    }

    // Third load: the purchase emptied the cart, the session survives.
    {
        let app = load_app(&dir);
        assert!(app.auth.is_authenticated());
        assert_eq!(app.cart.item_count(), 0);
        app.auth.logout().unwrap();
    }

    // Fourth load: the logout survives too.
    let app = load_app(&dir);
    assert!(!app.auth.is_authenticated());
    assert!(app.auth.identity().is_none());
}

#[test]
fn test_seeded_garbage_cart_record_recovers_to_empty() {
    let dir = TempDir::new().unwrap();

    {
        let storage = FileStorage::open(dir.path().join("store.toml")).unwrap();
        use buystuff_core::storage::{KeyValueStorage, keys};
        storage.set(keys::CART_ITEMS, "definitely not json").unwrap();
    }

    let app = load_app(&dir);
    assert_eq!(app.cart.item_count(), 0);

    // The engine still works after recovery.
    app.cart
        .add_item(&catalog::visual_catalog()[1], MediaKind::Visual)
        .unwrap();
    assert_eq!(app.cart.item_count(), 1);
}
