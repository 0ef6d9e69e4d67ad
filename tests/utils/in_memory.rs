/// In-memory repository fakes
///
/// One shared store implements every storage port so use cases and the
/// router can be exercised without Postgres. A single mutex makes each
/// operation atomic, which mirrors the row lock the Diesel rating
/// repository takes.
use async_trait::async_trait;
use movie_catalog_lib::commands::Repositories;
use movie_catalog_lib::modules::identity::{User, UserRepository};
use movie_catalog_lib::modules::moderation::{MovieReport, ReportRepository, ReportStatus};
use movie_catalog_lib::modules::movie::{Movie, MovieRepository};
use movie_catalog_lib::modules::rating::{
    Rating, RatingAggregator, RatingRepository, RecordedRating, Score,
};
use movie_catalog_lib::shared::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    movies: Vec<Movie>,
    ratings: Vec<Rating>,
    reports: Vec<MovieReport>,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        match self.tables.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn insert_user(&self, user: User) {
        self.lock().users.push(user);
    }

    pub fn ratings_for(&self, movie_id: Uuid) -> Vec<Rating> {
        self.lock()
            .ratings
            .iter()
            .filter(|r| r.movie_id == movie_id)
            .cloned()
            .collect()
    }

    pub fn reports(&self) -> Vec<MovieReport> {
        self.lock().reports.clone()
    }

    pub fn movie(&self, id: Uuid) -> Option<Movie> {
        self.lock().movies.iter().find(|m| m.id == id).cloned()
    }

    /// Every port backed by this store
    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            users: self.clone(),
            movies: self.clone(),
            ratings: self.clone(),
            reports: self.clone(),
        }
    }
}

fn newest_first(mut movies: Vec<Movie>) -> Vec<Movie> {
    movies.reverse();
    movies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    movies
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl MovieRepository for InMemoryStore {
    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        self.lock().movies.push(movie.clone());
        Ok(movie.clone())
    }

    async fn update(&self, movie: &Movie) -> AppResult<Movie> {
        let mut tables = self.lock();
        let stored = tables
            .movies
            .iter_mut()
            .find(|m| m.id == movie.id)
            .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

        // Same columns the Diesel changeset writes
        stored.title = movie.title.clone();
        stored.description = movie.description.clone();
        stored.released_at = movie.released_at;
        stored.duration = movie.duration;
        stored.genre = movie.genre.clone();
        stored.language = movie.language.clone();
        stored.updated_at = movie.updated_at;
        let updated = stored.clone();
        Ok(updated)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        Ok(self.movie(id))
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.lock().movies.iter().any(|m| m.id == id))
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Movie>> {
        let movies = newest_first(self.lock().movies.clone());
        Ok(movies
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.lock().movies.len() as u64)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Movie>> {
        let owned = self
            .lock()
            .movies
            .iter()
            .filter(|m| m.created_by == owner_id)
            .cloned()
            .collect();
        Ok(newest_first(owned))
    }
}

#[async_trait]
impl RatingRepository for InMemoryStore {
    async fn record(&self, rating: &Rating) -> AppResult<RecordedRating> {
        let mut tables = self.lock();

        if !tables.movies.iter().any(|m| m.id == rating.movie_id) {
            return Err(AppError::NotFound("Movie not found".to_string()));
        }

        tables.ratings.push(rating.clone());
        let scores: Vec<Score> = tables
            .ratings
            .iter()
            .filter(|r| r.movie_id == rating.movie_id)
            .map(|r| r.score)
            .collect();
        let summary = RatingAggregator::summarize(&scores);

        if let Some(movie) = tables.movies.iter_mut().find(|m| m.id == rating.movie_id) {
            movie.average_rating = summary.average;
        }

        Ok(RecordedRating {
            rating: rating.clone(),
            summary,
        })
    }

    async fn scores_for_movie(&self, movie_id: Uuid) -> AppResult<Vec<Score>> {
        Ok(self.ratings_for(movie_id).into_iter().map(|r| r.score).collect())
    }
}

#[async_trait]
impl ReportRepository for InMemoryStore {
    async fn create(&self, report: &MovieReport) -> AppResult<MovieReport> {
        self.lock().reports.push(report.clone());
        Ok(report.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MovieReport>> {
        Ok(self.lock().reports.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_status(&self, status: ReportStatus) -> AppResult<Vec<MovieReport>> {
        let mut matching: Vec<MovieReport> = self
            .lock()
            .reports
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.reported_at.cmp(&b.reported_at));
        Ok(matching)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ReportStatus,
    ) -> AppResult<Option<MovieReport>> {
        let mut tables = self.lock();
        let updated = tables.reports.iter_mut().find(|r| r.id == id).map(|report| {
            report.status = status;
            report.clone()
        });
        Ok(updated)
    }
}
