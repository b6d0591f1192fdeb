//! Main authentication service implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{AuthError, DomainError, DomainResult, RepositoryError};
use crate::repositories::{AppRepository, CodeRepository, UserRepository};
use crate::services::email::{EmailSender, VerificationEmail};
use crate::services::otp::CodeGenerator;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenIssuer;

use super::config::AuthServiceConfig;

/// Authentication service for the credential and verification-code lifecycle.
///
/// Stateless between calls: all mutable state lives in the injected stores,
/// so every operation may run concurrently with any other. Collaborator
/// failures are translated into the public error taxonomy here and never
/// escape in their original form.
pub struct AuthService<U, A, C, M>
where
    U: UserRepository,
    A: AppRepository,
    C: CodeRepository,
    M: EmailSender,
{
    /// Durable user records
    user_repository: Arc<U>,
    /// Application registry
    app_repository: Arc<A>,
    /// Ephemeral verification-code store
    code_repository: Arc<C>,
    /// Verification email dispatch
    email_sender: Arc<M>,
    /// Credential hashing
    password_hasher: PasswordHasher,
    /// One-time code generation
    code_generator: CodeGenerator,
    /// Session token issuance
    token_issuer: TokenIssuer,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, A, C, M> AuthService<U, A, C, M>
where
    U: UserRepository,
    A: AppRepository,
    C: CodeRepository,
    M: EmailSender,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        app_repository: Arc<A>,
        code_repository: Arc<C>,
        email_sender: Arc<M>,
        password_hasher: PasswordHasher,
        token_issuer: TokenIssuer,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            app_repository,
            code_repository,
            email_sender,
            password_hasher,
            code_generator: CodeGenerator::new(),
            token_issuer,
            config,
        }
    }

    /// Authenticate a user and issue a session token for an application.
    ///
    /// The user may be addressed by email or phone. An unknown user and a
    /// wrong password both surface as `InvalidCredentials` so callers cannot
    /// enumerate accounts; an unknown application surfaces as `InvalidAppId`.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        phone: &str,
        app_id: i32,
    ) -> DomainResult<(User, String)> {
        info!(operation = "auth.login", email, phone, "logging user in");

        let user = self
            .user_repository
            .find_by_login(email, phone)
            .await
            .map_err(|e| {
                error!(operation = "auth.login", error = %e, "failed to get user");
                DomainError::internal("auth.login", e)
            })?
            .ok_or_else(|| {
                warn!(operation = "auth.login", email, "user not found");
                AuthError::InvalidCredentials
            })?;

        if !self.password_hasher.verify(password, &user.pass_hash) {
            info!(operation = "auth.login", email, "invalid credentials");
            return Err(AuthError::InvalidCredentials.into());
        }

        let app = self
            .app_repository
            .find_by_id(app_id)
            .await
            .map_err(|e| {
                error!(operation = "auth.login", error = %e, "failed to get app");
                DomainError::internal("auth.login", e)
            })?
            .ok_or_else(|| {
                warn!(operation = "auth.login", app_id, "app not found");
                AuthError::InvalidAppId
            })?;

        let token = self
            .token_issuer
            .issue(&user, &app, self.config.token_ttl)
            .map_err(|e| {
                error!(operation = "auth.login", error = %e, "failed to generate token");
                DomainError::internal("auth.login", e)
            })?;

        info!(operation = "auth.login", user_id = user.id, "user logged in");

        Ok((user, token))
    }

    /// Register a new user and return the assigned id.
    ///
    /// A collision on email or phone surfaces as `UserExists` without
    /// revealing which field collided.
    #[allow(clippy::too_many_arguments)]
    pub async fn register_new_user(
        &self,
        title: &str,
        birth_date: &str,
        name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> DomainResult<i64> {
        info!(operation = "auth.register", email, "registering user");

        let pass_hash = self.password_hasher.hash(password)?;

        let id = self
            .user_repository
            .create_user(NewUser {
                title: title.to_string(),
                birth_date: birth_date.to_string(),
                name: name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                pass_hash,
                phone: phone.to_string(),
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicate => {
                    warn!(operation = "auth.register", email, "user already exists");
                    AuthError::UserExists.into()
                }
                other => {
                    error!(operation = "auth.register", error = %other, "failed to save user");
                    DomainError::internal("auth.register", other)
                }
            })?;

        info!(operation = "auth.register", user_id = id, "user registered");

        Ok(id)
    }

    /// Look up whether a user holds the admin flag.
    pub async fn is_admin(&self, user_id: i64) -> DomainResult<bool> {
        info!(operation = "auth.is_admin", user_id, "checking admin flag");

        let is_admin = self
            .user_repository
            .is_admin(user_id)
            .await
            .map_err(|e| {
                error!(operation = "auth.is_admin", error = %e, "failed to get admin flag");
                DomainError::internal("auth.is_admin", e)
            })?
            .ok_or_else(|| {
                warn!(operation = "auth.is_admin", user_id, "user not found");
                AuthError::UserNotFound
            })?;

        info!(operation = "auth.is_admin", user_id, is_admin, "checked admin flag");

        Ok(is_admin)
    }

    /// First phase of a password reset: re-authenticate, issue a one-time
    /// code, and email it to the user.
    ///
    /// The stored code replaces any previously outstanding code for the same
    /// user. Email delivery is best-effort: the code is already persisted,
    /// so a failed send is logged and the operation still succeeds. Returns
    /// the code's expiry timestamp and the user id to present during
    /// confirmation.
    pub async fn change_password_init(
        &self,
        email: &str,
        phone: &str,
        old_password: &str,
    ) -> DomainResult<(DateTime<Utc>, i64)> {
        info!(operation = "auth.change_password_init", email, "getting user");

        let user = self
            .user_repository
            .find_by_login(email, phone)
            .await
            .map_err(|e| {
                error!(operation = "auth.change_password_init", error = %e, "failed to get user");
                DomainError::internal("auth.change_password_init", e)
            })?
            .ok_or_else(|| {
                warn!(operation = "auth.change_password_init", email, "user not found");
                AuthError::InvalidCredentials
            })?;

        if !self.password_hasher.verify(old_password, &user.pass_hash) {
            info!(operation = "auth.change_password_init", email, "invalid credentials");
            return Err(AuthError::InvalidCredentials.into());
        }

        let code = self.code_generator.generate(self.config.code_length);

        self.code_repository
            .save_code(user.id, &code, self.config.code_ttl)
            .await
            .map_err(|e| {
                error!(
                    operation = "auth.change_password_init",
                    error = %e,
                    "failed to save verification code"
                );
                DomainError::internal("auth.change_password_init", e)
            })?;

        let expires_at = Utc::now()
            + chrono::Duration::from_std(self.config.code_ttl)
                .unwrap_or_else(|_| chrono::Duration::seconds(0));

        if let Err(e) = self
            .email_sender
            .send_verification(VerificationEmail {
                to: user.email.clone(),
                name: user.name.clone(),
                code,
            })
            .await
        {
            // The code is confirmable through any channel that delivers it;
            // a lost email must not fail the reset.
            warn!(
                operation = "auth.change_password_init",
                error = %e,
                "failed to send verification email"
            );
        }

        info!(
            operation = "auth.change_password_init",
            user_id = user.id,
            "verification code issued"
        );

        Ok((expires_at, user.id))
    }

    /// Second phase of a password reset: match the one-time code and persist
    /// the new password hash.
    ///
    /// A code that was never issued, has expired, or does not match all
    /// surface as `InvalidCredentials`; the caller learns nothing about code
    /// liveness. A mismatch leaves the outstanding code intact so the user
    /// can retry until the TTL elapses.
    pub async fn change_password_confirm(
        &self,
        code: &str,
        user_id: i64,
        email: &str,
        new_password: &str,
    ) -> DomainResult<bool> {
        info!(
            operation = "auth.change_password_confirm",
            user_id, "comparing verification code"
        );

        let stored = self
            .code_repository
            .find_code(user_id)
            .await
            .map_err(|e| {
                error!(
                    operation = "auth.change_password_confirm",
                    error = %e,
                    "failed to get code"
                );
                DomainError::internal("auth.change_password_confirm", e)
            })?
            .ok_or_else(|| {
                warn!(
                    operation = "auth.change_password_confirm",
                    user_id, "no live verification code"
                );
                AuthError::InvalidCredentials
            })?;

        if !stored.matches(code) {
            warn!(
                operation = "auth.change_password_confirm",
                user_id, "verification code mismatch"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let pass_hash = self.password_hasher.hash(new_password)?;

        self.user_repository
            .set_password(email, &pass_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    warn!(
                        operation = "auth.change_password_confirm",
                        email, "no user with that email"
                    );
                    AuthError::InvalidCredentials.into()
                }
                other => {
                    error!(
                        operation = "auth.change_password_confirm",
                        error = %other,
                        "failed to change password"
                    );
                    DomainError::internal("auth.change_password_confirm", other)
                }
            })?;

        // Consumed codes must not be replayable within the remaining TTL.
        if let Err(e) = self.code_repository.delete_code(user_id).await {
            warn!(
                operation = "auth.change_password_confirm",
                error = %e,
                "failed to drop consumed code"
            );
        }

        info!(
            operation = "auth.change_password_confirm",
            user_id, "password changed"
        );

        Ok(true)
    }
}
