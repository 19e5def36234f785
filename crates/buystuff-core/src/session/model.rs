//! Session domain model.

/// The authenticated/anonymous state of the current user.
///
/// Invariant: `identity` is `Some` exactly when `active` is true. The only
/// transitions are anonymous-to-authenticated via a successful login and
/// authenticated-to-anonymous via logout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Whether a verified identity is attached.
    pub active: bool,
    /// The verified username, present iff `active`.
    pub identity: Option<String>,
}

impl Session {
    /// The anonymous session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session authenticated as `identity`.
    pub fn authenticated(identity: impl Into<String>) -> Self {
        Self {
            active: true,
            identity: Some(identity.into()),
        }
    }
}
