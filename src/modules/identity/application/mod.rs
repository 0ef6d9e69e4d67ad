pub mod guard;
pub mod service;
pub mod token;

pub use guard::{Authorized, RequireCapability};
pub use service::IdentityService;
pub use token::{TokenClaims, TokenDecoder};
