use crate::shared::errors::AppResult;
/// Base traits for use cases following CQRS pattern
///
/// Command handlers mutate state, query handlers only read it. Both
/// return `AppResult` so every failure reaches the transport as a
/// structured error.
///
/// # Example
///
/// ```ignore
/// struct SubmitRatingHandler {
///     ratings: Arc<dyn RatingRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<SubmitRatingCommand, SubmitRatingResult> for SubmitRatingHandler {
///     async fn execute(&self, command: SubmitRatingCommand) -> AppResult<SubmitRatingResult> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult>: Send + Sync {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult>: Send + Sync {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
