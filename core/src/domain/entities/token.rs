//! Session token claims.
//!
//! The claim layout is a stable contract for downstream verifiers:
//! `{ sub, email, app_id, iat, exp }`, signed with a key derived from the
//! application secret and valid for the configured TTL window.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::user::User;

/// Claims carried by an issued session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id
    pub sub: i64,

    /// The authenticated user's email
    pub email: String,

    /// The application the token was issued for
    pub app_id: i32,

    /// Issued-at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds), `iat` plus the configured TTL
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user logging in to an application.
    pub fn new(user: &User, app_id: i32, ttl: Duration) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            sub: user.id,
            email: user.email.clone(),
            app_id,
            iat,
            exp: iat + ttl.as_secs() as i64,
        }
    }

    /// Check whether the claims have expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 11,
            title: String::new(),
            birth_date: String::new(),
            name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            email: "alice@example.com".to_string(),
            pass_hash: Vec::new(),
            phone: "+10000000000".to_string(),
        }
    }

    #[test]
    fn test_claims_span_equals_ttl() {
        let claims = Claims::new(&sample_user(), 3, Duration::from_secs(900));
        assert_eq!(claims.sub, 11);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.app_id, 3);
        assert_eq!(claims.exp - claims.iat, 900);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let claims = Claims::new(&sample_user(), 3, Duration::from_secs(0));
        assert!(claims.is_expired());
    }
}
