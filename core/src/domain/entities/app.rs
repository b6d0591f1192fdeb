//! Application entity for registered client applications.

use std::fmt;

/// A client application registered with the SSO service.
///
/// The shared secret is persisted only as a bcrypt hash; the plaintext value
/// lives exclusively in process configuration and is compared against the
/// hash during startup reconciliation.
#[derive(Clone, PartialEq, Eq)]
pub struct App {
    /// Unique identifier for the application
    pub id: i32,

    /// Human-readable application name
    pub name: String,

    /// bcrypt hash of the application secret
    pub secret_hash: Vec<u8>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret_hash() {
        let app = App {
            id: 1,
            name: "dashboard".to_string(),
            secret_hash: b"$2b$12$secretsecretsecret".to_vec(),
        };

        let rendered = format!("{:?}", app);
        assert!(rendered.contains("dashboard"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secretsecret"));
    }
}
