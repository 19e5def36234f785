//! Purchase confirmation use case.
//!
//! The storefront's "Buy Now" flow: present a summary of the pending
//! selection, then clear the cart on confirmation. There is no payment
//! processing behind it; confirming the purchase is the end of the line.

use std::sync::Arc;

use buystuff_core::cart::CartStore;
use buystuff_core::error::{BuystuffError, Result};
use buystuff_core::session::AuthSession;
use serde::Serialize;

use crate::context::AppContext;

/// What the purchase confirmation shows: the aggregates of the cart at the
/// moment of checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    /// Number of cart lines purchased.
    pub item_count: usize,
    /// Total price of the purchase.
    pub total_price: f64,
}

/// Confirms purchases against the shared session and cart.
pub struct CheckoutService {
    auth: Arc<AuthSession>,
    cart: Arc<CartStore>,
}

impl CheckoutService {
    /// Creates the service over the shared instances.
    pub fn new(auth: Arc<AuthSession>, cart: Arc<CartStore>) -> Self {
        Self { auth, cart }
    }

    /// Creates the service from a wired context.
    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.auth.clone(), ctx.cart.clone())
    }

    /// Confirms the purchase of the current cart.
    ///
    /// Captures the cart's count and total, clears it (which deletes the
    /// persisted record and notifies cart subscribers), and returns the
    /// captured summary. Refused with [`BuystuffError::Checkout`] for an
    /// anonymous session or an empty cart; a refusal touches nothing.
    pub fn checkout(&self) -> Result<CheckoutSummary> {
        if !self.auth.is_authenticated() {
            return Err(BuystuffError::checkout("no authenticated session"));
        }

        let summary = CheckoutSummary {
            item_count: self.cart.item_count(),
            total_price: self.cart.total_price(),
        };
        if summary.item_count == 0 {
            return Err(BuystuffError::checkout("cart is empty"));
        }

        self.cart.clear()?;
        tracing::info!(
            items = summary.item_count,
            total = summary.total_price,
            "purchase confirmed"
        );
        Ok(summary)
    }
}
