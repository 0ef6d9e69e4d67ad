pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::MovieService;
pub use domain::{Movie, MovieChanges, MovieDraft, MovieRepository};
pub use infrastructure::MovieRepositoryImpl;
