//! Business services.

pub mod auth;
pub mod email;
pub mod otp;
pub mod password;
pub mod token;

pub use auth::{AuthService, AuthServiceConfig};
pub use email::{EmailSender, VerificationEmail};
pub use otp::CodeGenerator;
pub use password::PasswordHasher;
pub use token::TokenIssuer;
