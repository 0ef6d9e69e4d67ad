use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use super::models::{MovieReportModel, NewMovieReport};
use crate::log_debug;
use crate::modules::moderation::domain::{MovieReport, ReportRepository, ReportStatus};
use crate::schema::movie_reports;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{with_connection, Database};

pub struct ReportRepositoryImpl {
    db: Arc<Database>,
}

impl ReportRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportRepository for ReportRepositoryImpl {
    async fn create(&self, report: &MovieReport) -> AppResult<MovieReport> {
        let new_report = NewMovieReport::from(report);

        with_connection(&self.db, move |conn| {
            let saved = diesel::insert_into(movie_reports::table)
                .values(&new_report)
                .returning(MovieReportModel::as_returning())
                .get_result(conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to save report: {}", e)))?;
            Ok(MovieReport::from(saved))
        })
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MovieReport>> {
        with_connection(&self.db, move |conn| {
            let report = movie_reports::table
                .find(id)
                .select(MovieReportModel::as_select())
                .first::<MovieReportModel>(conn)
                .optional()?;
            Ok(report.map(MovieReport::from))
        })
        .await
    }

    async fn list_by_status(&self, status: ReportStatus) -> AppResult<Vec<MovieReport>> {
        with_connection(&self.db, move |conn| {
            let rows = movie_reports::table
                .filter(movie_reports::status.eq(status))
                .order(movie_reports::reported_at.asc())
                .select(MovieReportModel::as_select())
                .load::<MovieReportModel>(conn)?;
            log_debug!("Loaded {} reports with status {}", rows.len(), status);
            Ok(rows.into_iter().map(MovieReport::from).collect())
        })
        .await
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ReportStatus,
    ) -> AppResult<Option<MovieReport>> {
        with_connection(&self.db, move |conn| {
            let updated = diesel::update(movie_reports::table.find(id))
                .set(movie_reports::status.eq(status))
                .returning(MovieReportModel::as_returning())
                .get_result::<MovieReportModel>(conn)
                .optional()?;
            Ok(updated.map(MovieReport::from))
        })
        .await
    }
}
