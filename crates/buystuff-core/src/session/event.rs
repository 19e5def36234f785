use serde::{Deserialize, Serialize};

/// Change notifications published by the session store.
///
/// One event is delivered per successful state transition; a failed login
/// and a logout of an already-anonymous session publish nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthEvent {
    /// A credential pair was verified and the session became authenticated.
    LoggedIn { identity: String },
    /// The session was reset to anonymous.
    LoggedOut,
}
