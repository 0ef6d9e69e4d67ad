pub mod capability;
pub mod entities;
pub mod repository;

pub use capability::Capability;
pub use entities::{Caller, User};
pub use repository::UserRepository;
