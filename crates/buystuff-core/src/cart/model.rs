//! Cart line model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{CatalogEntry, MediaKind};

/// A catalog entry that has been placed in the cart.
///
/// The catalog fields are flattened into the persisted record, so a cart
/// line serializes to a single flat object with the entry's fields plus
/// `type`, `cartId` and `addedAt`, the shape the `cart.items` record uses.
///
/// `cart_id` is unique within the cart at all times: two lines for the same
/// catalog entry and kind still carry different `cart_id`s and are removed
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// The selected catalog entry, copied at insertion time.
    #[serde(flatten)]
    pub entry: CatalogEntry,
    /// Which catalog the entry came from.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Uniqueness key distinguishing repeated selections of one product.
    pub cart_id: String,
    /// Insertion timestamp (UTC).
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Builds a new cart line for `entry`.
    ///
    /// The `cart_id` is `<kind>-<catalog id>-<uuid>`; the random component
    /// keeps ids unique even for immediate repeated additions of the same
    /// entry, which a wall-clock component could not guarantee.
    pub(crate) fn new(entry: &CatalogEntry, kind: MediaKind) -> Self {
        Self {
            entry: entry.clone(),
            kind,
            cart_id: format!("{}-{}-{}", kind.slug(), entry.id, Uuid::new_v4()),
            added_at: Utc::now(),
        }
    }

    /// Price of this line.
    pub fn price(&self) -> f64 {
        self.entry.price
    }
}
