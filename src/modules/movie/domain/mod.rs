pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::movie::{Movie, MovieChanges, MovieDraft};
pub use repositories::movie_repository::MovieRepository;
