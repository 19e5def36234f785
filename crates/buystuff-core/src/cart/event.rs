use serde::{Deserialize, Serialize};

use super::model::CartEntry;

/// Change notifications published by the cart store.
///
/// One event per successful mutation. A removal that matched nothing
/// publishes nothing; a clear always publishes, even over an already-empty
/// cart, because the operation still completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A new line was appended to the cart.
    ItemAdded { entry: CartEntry },
    /// The line with this `cart_id` was removed.
    ItemRemoved { cart_id: String },
    /// The cart was emptied.
    Cleared,
}
