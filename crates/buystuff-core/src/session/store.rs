//! Shared session store.

use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::session::event::AuthEvent;
use crate::session::model::Session;
use crate::session::verifier::CredentialVerifier;
use crate::storage::{KeyValueStorage, keys};
use crate::subscription::{Subscribers, SubscriptionId};

/// The authentication gate.
///
/// A single shared instance holds the session for the whole process; every
/// consumer references it and mutates only through [`login`](Self::login)
/// and [`logout`](Self::logout). State is hydrated from storage once, at
/// construction, and written back on every transition.
pub struct AuthSession {
    storage: Arc<dyn KeyValueStorage>,
    verifier: Arc<dyn CredentialVerifier>,
    state: Mutex<Session>,
    subscribers: Mutex<Subscribers<AuthEvent>>,
}

impl AuthSession {
    /// Creates the session store and hydrates it from storage.
    ///
    /// The persisted state is restored only when the active-flag record
    /// decodes to `"true"` and an identity record is present; any other
    /// combination (absent, partial, malformed) leaves the session
    /// anonymous. Unusable records are a diagnostic, not an error.
    pub fn new(storage: Arc<dyn KeyValueStorage>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let flag = storage.get(keys::AUTH_ACTIVE);
        let identity = storage.get(keys::AUTH_IDENTITY);

        let session = match (flag.as_deref(), identity) {
            (Some("true"), Some(identity)) => {
                tracing::debug!(%identity, "restored persisted session");
                Session::authenticated(identity)
            }
            (None, None) => Session::anonymous(),
            (flag, identity) => {
                tracing::warn!(
                    flag = flag.unwrap_or("<absent>"),
                    has_identity = identity.is_some(),
                    "discarding unusable persisted session records"
                );
                Session::anonymous()
            }
        };

        Self {
            storage,
            verifier,
            state: Mutex::new(session),
            subscribers: Mutex::new(Subscribers::new()),
        }
    }

    /// Attempts to authenticate with the given credential pair.
    ///
    /// On a verifier match the session becomes authenticated as `username`,
    /// both records are persisted, subscribers are notified and `Ok(true)`
    /// is returned. On a mismatch nothing changes and `Ok(false)` is
    /// returned; a rejected credential is a result, not an error. Logging in
    /// while already authenticated is permitted and re-runs the same
    /// transition.
    ///
    /// `Err` is reserved for storage write failures; the in-memory
    /// transition has already happened when one is reported.
    pub fn login(&self, username: &str, password: &str) -> Result<bool> {
        if !self.verifier.verify(username, password) {
            tracing::debug!(%username, "credential pair rejected");
            return Ok(false);
        }

        {
            let mut state = self.state.lock().expect("session state lock poisoned");
            *state = Session::authenticated(username);
            self.storage.set(keys::AUTH_ACTIVE, "true")?;
            self.storage.set(keys::AUTH_IDENTITY, username)?;
        }

        tracing::info!(%username, "session authenticated");
        self.publish(&AuthEvent::LoggedIn {
            identity: username.to_string(),
        });
        Ok(true)
    }

    /// Resets the session to anonymous and removes the persisted records.
    ///
    /// Idempotent: logging out of an anonymous session is a no-op that
    /// touches nothing and notifies nobody.
    pub fn logout(&self) -> Result<()> {
        {
            let mut state = self.state.lock().expect("session state lock poisoned");
            if !state.active {
                return Ok(());
            }
            *state = Session::anonymous();
            self.storage.remove(keys::AUTH_ACTIVE)?;
            self.storage.remove(keys::AUTH_IDENTITY)?;
        }

        tracing::info!("session reset to anonymous");
        self.publish(&AuthEvent::LoggedOut);
        Ok(())
    }

    /// Whether a verified identity is attached. Pure query.
    pub fn is_authenticated(&self) -> bool {
        self.state
            .lock()
            .expect("session state lock poisoned")
            .active
    }

    /// The verified username, if authenticated. Pure query.
    pub fn identity(&self) -> Option<String> {
        self.state
            .lock()
            .expect("session state lock poisoned")
            .identity
            .clone()
    }

    /// Registers a listener for session transitions.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        self.subscribers
            .lock()
            .expect("session subscriber lock poisoned")
            .subscribe(listener)
    }

    /// Removes a previously registered listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers
            .lock()
            .expect("session subscriber lock poisoned")
            .unsubscribe(id)
    }

    // Delivered synchronously, after the state lock is released, so
    // listeners can query the store.
    fn publish(&self, event: &AuthEvent) {
        self.subscribers
            .lock()
            .expect("session subscriber lock poisoned")
            .emit(event);
    }
}
