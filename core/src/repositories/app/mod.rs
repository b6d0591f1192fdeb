#[path = "trait.rs"]
mod trait_;

pub mod mock;

pub use mock::MockAppRepository;
pub use trait_::AppRepository;
