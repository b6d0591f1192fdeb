//! Database module - MySQL implementations using SQLx

mod connection;
pub mod mysql;

pub use connection::connect;
pub use mysql::{MySqlAppRepository, MySqlUserRepository};
