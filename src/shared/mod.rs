// Shared Kernel
// Cross-cutting pieces every bounded context depends on

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database)
pub mod utils; // Logging and validation

// Re-exports for convenience
pub use config::AppConfig;
pub use infrastructure::database::Database;
