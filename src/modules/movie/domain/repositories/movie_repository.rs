use crate::modules::movie::domain::entities::movie::Movie;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn save(&self, movie: &Movie) -> AppResult<Movie>;

    /// Persists editable fields only; the rating aggregate is left as stored.
    async fn update(&self, movie: &Movie) -> AppResult<Movie>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>>;

    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// Newest first
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Movie>>;

    async fn count(&self) -> AppResult<u64>;

    /// Newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Movie>>;
}
