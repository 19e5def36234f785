//! Persistence adapter boundary.
//!
//! The stores persist through a scoped key-value store with synchronous
//! get/set/remove and no transactional guarantees. The trait is the whole
//! contract; what sits behind it (process memory, a file on disk) is an
//! infrastructure decision.

mod memory;

pub use memory::MemoryStorage;

use crate::error::Result;

/// Record keys used by the engine.
///
/// All values are textual. `auth.active` is `"true"` or absent (anything
/// else counts as inactive), `auth.identity` is the raw username and only
/// meaningful alongside an active flag, and `cart.items` is a JSON array of
/// cart entries, absent for an empty cart.
pub mod keys {
    /// Session active flag record.
    pub const AUTH_ACTIVE: &str = "auth.active";
    /// Session identity record.
    pub const AUTH_IDENTITY: &str = "auth.identity";
    /// Serialized cart sequence record.
    pub const CART_ITEMS: &str = "cart.items";
}

/// Scoped key-value storage used by the session and cart stores.
///
/// Reads are infallible lookups; writes can fail (disk full, permissions)
/// and the failure propagates to the mutating caller. Implementations must
/// be shareable across consumers.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the record under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}
