//! MySQL repository implementations

mod app_repository_impl;
mod user_repository_impl;

pub use app_repository_impl::MySqlAppRepository;
pub use user_repository_impl::MySqlUserRepository;
