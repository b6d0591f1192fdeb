//! User entity representing a registered account in the SSO system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User entity representing a registered account.
///
/// The password hash is opaque to every consumer of this type: it is skipped
/// during serialization and redacted from debug output so it can never reach
/// a log line or a response body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Salutation (e.g. "Mr", "Ms", "Dr")
    pub title: String,

    /// Date of birth as supplied at registration
    pub birth_date: String,

    /// Given name
    pub name: String,

    /// Family name
    pub last_name: String,

    /// Email address, unique across users
    pub email: String,

    /// Salted one-way password hash
    #[serde(skip_serializing, default)]
    pub pass_hash: Vec<u8>,

    /// Phone number, unique across users
    pub phone: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("birth_date", &self.birth_date)
            .field("name", &self.name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("pass_hash", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}

/// Fields required to create a user; the repository assigns the id.
#[derive(Clone)]
pub struct NewUser {
    pub title: String,
    pub birth_date: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub pass_hash: Vec<u8>,
    pub phone: String,
}

impl NewUser {
    /// Materialize the user record the repository would hand back for the
    /// given id. Used by in-memory implementations.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            title: self.title,
            birth_date: self.birth_date,
            name: self.name,
            last_name: self.last_name,
            email: self.email,
            pass_hash: self.pass_hash,
            phone: self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            title: "Ms".to_string(),
            birth_date: "1990-04-02".to_string(),
            name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            email: "alice@example.com".to_string(),
            pass_hash: b"$2b$12$abcdefghijklmnopqrstuv".to_vec(),
            phone: "+10000000000".to_string(),
        }
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let rendered = format!("{:?}", sample_user());
        assert!(rendered.contains("alice@example.com"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("abcdefghijklmnopqrstuv"));
    }

    #[test]
    fn test_serialization_skips_password_hash() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(json.contains("alice@example.com"));
        assert!(!json.contains("pass_hash"));
    }

    #[test]
    fn test_new_user_into_user() {
        let new_user = NewUser {
            title: "Mr".to_string(),
            birth_date: "1985-12-24".to_string(),
            name: "Bob".to_string(),
            last_name: "Smith".to_string(),
            email: "bob@example.com".to_string(),
            pass_hash: vec![1, 2, 3],
            phone: "+20000000000".to_string(),
        };

        let user = new_user.into_user(42);
        assert_eq!(user.id, 42);
        assert_eq!(user.email, "bob@example.com");
        assert_eq!(user.pass_hash, vec![1, 2, 3]);
    }
}
