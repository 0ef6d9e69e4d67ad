//! Identity: resolves bearer credentials to callers and gates moderation
//! operations behind capabilities.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{Authorized, IdentityService, RequireCapability, TokenClaims, TokenDecoder};
pub use domain::{Caller, Capability, User, UserRepository};
pub use infrastructure::UserRepositoryImpl;
