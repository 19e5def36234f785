//! Change-notification registry shared by the stores.
//!
//! Every successful mutation of a store publishes exactly one event, and the
//! publish step runs synchronously before the mutating call returns, so any
//! consumer observes the latest state immediately afterwards.

/// Handle identifying a registered listener; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered registry of event listeners.
///
/// Listeners are invoked in subscription order. They run while the registry
/// is borrowed, so a listener must not subscribe or unsubscribe from within
/// its own callback; reading store state is fine because events are emitted
/// only after the state lock is released.
pub(crate) struct Subscribers<E> {
    next_id: u64,
    listeners: Vec<(u64, Box<dyn Fn(&E) + Send + Sync>)>,
}

impl<E> Subscribers<E> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener and returns its handle.
    pub(crate) fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    /// Removes a listener. Returns `false` if the handle was unknown.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id.0);
        self.listeners.len() != before
    }

    /// Delivers `event` to every current listener, in subscription order.
    pub(crate) fn emit(&self, event: &E) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}
