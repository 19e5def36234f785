//! Pluggable credential verification.
//!
//! The session lifecycle never inspects credentials itself; it delegates to
//! a verifier so the policy can be swapped without touching login/logout.

/// Credential verification policy.
///
/// # Security Note
///
/// The bundled [`StaticCredentials`] policy embeds a literal credential pair
/// and is not a security boundary. It exists for the storefront demo only;
/// anything resembling real authentication needs its own implementation of
/// this trait.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` when the pair matches the policy.
    ///
    /// Comparison semantics are up to the implementation; the default policy
    /// is an exact, case-sensitive match with no normalization.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed single-credential policy for the demo storefront.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Creates a policy accepting exactly the given pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    /// The demo pair: `admin` / `123`.
    fn default() -> Self {
        Self::new("admin", "123")
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_matches() {
        let verifier = StaticCredentials::default();
        assert!(verifier.verify("admin", "123"));
    }

    #[test]
    fn test_mismatch_rejected() {
        let verifier = StaticCredentials::default();
        assert!(!verifier.verify("admin", "wrong"));
        assert!(!verifier.verify("someone", "123"));
        assert!(!verifier.verify("", ""));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let verifier = StaticCredentials::default();
        assert!(!verifier.verify("Admin", "123"));
    }

    #[test]
    fn test_custom_pair() {
        let verifier = StaticCredentials::new("clerk", "s3cret");
        assert!(verifier.verify("clerk", "s3cret"));
        assert!(!verifier.verify("admin", "123"));
    }
}
