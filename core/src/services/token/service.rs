//! Token issuer implementation.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::time::Duration;

use crate::domain::entities::app::App;
use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::TokenError;

/// Issues signed, time-limited session tokens.
///
/// Tokens are HS256 JWTs over the claim layout in
/// [`Claims`](crate::domain::entities::token::Claims). The signing key is
/// derived from the plaintext application secret the process is provisioned
/// with - not from the hash stored in the registry - so only a process that
/// holds the application's secret context can mint a token its verifiers
/// will accept.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
}

impl TokenIssuer {
    /// Create an issuer signing with a key derived from `app_secret`.
    pub fn new(app_secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(app_secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
        }
    }

    /// Mint a token asserting `user`'s identity to `app`, valid for `ttl`.
    pub fn issue(&self, user: &User, app: &App, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(user, app.id, ttl);
        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    fn sample_user() -> User {
        User {
            id: 42,
            title: "Ms".to_string(),
            birth_date: "1990-04-02".to_string(),
            name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            email: "alice@example.com".to_string(),
            pass_hash: Vec::new(),
            phone: "+10000000000".to_string(),
        }
    }

    fn sample_app() -> App {
        App {
            id: 7,
            name: "portal".to_string(),
            secret_hash: Vec::new(),
        }
    }

    fn decode_claims(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|data| data.claims)
    }

    #[test]
    fn test_issued_token_carries_expected_claims() {
        let issuer = TokenIssuer::new("app-secret");
        let token = issuer
            .issue(&sample_user(), &sample_app(), Duration::from_secs(3600))
            .unwrap();

        let claims = decode_claims(&token, "app-secret").unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.app_id, 7);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_rejected_under_other_secret() {
        let issuer = TokenIssuer::new("app-secret");
        let token = issuer
            .issue(&sample_user(), &sample_app(), Duration::from_secs(3600))
            .unwrap();

        assert!(decode_claims(&token, "other-secret").is_err());
    }
}
