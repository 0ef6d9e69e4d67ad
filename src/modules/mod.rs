// Bounded contexts
pub mod identity; // Bearer credentials, callers, capabilities
pub mod moderation; // Movie reports and their resolution
pub mod movie; // Movie catalog
pub mod rating; // Scores and the per-movie average
