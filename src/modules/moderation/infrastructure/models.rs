use crate::modules::moderation::domain::{MovieReport, ReportStatus};
use crate::schema::movie_reports;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = movie_reports)]
pub struct MovieReportModel {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub reason: String,
    pub status: ReportStatus,
    pub reported_at: DateTime<Utc>,
}

// For inserting new reports
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movie_reports)]
pub struct NewMovieReport {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub reason: String,
    pub status: ReportStatus,
    pub reported_at: DateTime<Utc>,
}

impl From<MovieReportModel> for MovieReport {
    fn from(model: MovieReportModel) -> Self {
        MovieReport {
            id: model.id,
            movie_id: model.movie_id,
            user_id: model.user_id,
            reason: model.reason,
            status: model.status,
            reported_at: model.reported_at,
        }
    }
}

impl From<&MovieReport> for NewMovieReport {
    fn from(report: &MovieReport) -> Self {
        NewMovieReport {
            id: report.id,
            movie_id: report.movie_id,
            user_id: report.user_id,
            reason: report.reason.clone(),
            status: report.status,
            reported_at: report.reported_at,
        }
    }
}
