use std::sync::Arc;

use crate::modules::identity::{
    Authorized, IdentityService, RequireCapability, TokenDecoder, UserRepository,
    UserRepositoryImpl,
};
use crate::modules::moderation::{
    FileReportCommand, FileReportHandler, FileReportResult, ListPendingReportsHandler,
    ListPendingReportsQuery, ListPendingReportsResult, ReportRepository, ReportRepositoryImpl,
    ResolveReportCommand, ResolveReportHandler, ResolveReportResult,
};
use crate::modules::movie::{MovieRepository, MovieRepositoryImpl, MovieService};
use crate::modules::rating::{
    RatingRepository, RatingRepositoryImpl, SubmitRatingCommand, SubmitRatingHandler,
    SubmitRatingResult,
};
use crate::shared::application::{Query, UseCase};
use crate::shared::infrastructure::Database;

pub type SubmitRatingUseCase =
    Arc<dyn UseCase<Authorized<SubmitRatingCommand>, SubmitRatingResult>>;
pub type FileReportUseCase = Arc<dyn UseCase<Authorized<FileReportCommand>, FileReportResult>>;
pub type ListPendingReportsUseCase =
    Arc<dyn Query<Authorized<ListPendingReportsQuery>, ListPendingReportsResult>>;
pub type ResolveReportUseCase =
    Arc<dyn UseCase<Authorized<ResolveReportCommand>, ResolveReportResult>>;

/// Storage ports the application is wired from.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub movies: Arc<dyn MovieRepository>,
    pub ratings: Arc<dyn RatingRepository>,
    pub reports: Arc<dyn ReportRepository>,
}

impl Repositories {
    pub fn postgres(db: Arc<Database>) -> Self {
        Self {
            users: Arc::new(UserRepositoryImpl::new(Arc::clone(&db))),
            movies: Arc::new(MovieRepositoryImpl::new(Arc::clone(&db))),
            ratings: Arc::new(RatingRepositoryImpl::new(Arc::clone(&db))),
            reports: Arc::new(ReportRepositoryImpl::new(db)),
        }
    }
}

/// Shared router state. Moderation handlers are stored already wrapped in
/// the administrator gate.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<IdentityService>,
    pub movies: Arc<MovieService>,
    pub submit_rating: SubmitRatingUseCase,
    pub file_report: FileReportUseCase,
    pub list_pending_reports: ListPendingReportsUseCase,
    pub resolve_report: ResolveReportUseCase,
}

impl AppState {
    pub fn new(repositories: Repositories, decoder: TokenDecoder) -> Self {
        let Repositories {
            users,
            movies,
            ratings,
            reports,
        } = repositories;

        Self {
            identity: Arc::new(IdentityService::new(users, decoder)),
            movies: Arc::new(MovieService::new(Arc::clone(&movies))),
            submit_rating: Arc::new(SubmitRatingHandler::new(ratings)),
            file_report: Arc::new(FileReportHandler::new(Arc::clone(&reports), movies)),
            list_pending_reports: Arc::new(RequireCapability::administrator(
                ListPendingReportsHandler::new(Arc::clone(&reports)),
            )),
            resolve_report: Arc::new(RequireCapability::administrator(
                ResolveReportHandler::new(reports),
            )),
        }
    }
}
