//! Session token issuance.

mod service;

pub use service::TokenIssuer;
