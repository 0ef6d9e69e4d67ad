/// Report moderation tests - in-memory store
///
/// Tests cover:
/// - Filing reports against existing and missing movies
/// - Administrator gate on listing and resolution
/// - Resolution and overwrite of terminal reports
/// - The end-to-end rating and moderation walkthrough
mod utils;

use movie_catalog_lib::modules::identity::{Authorized, Caller};
use movie_catalog_lib::modules::moderation::{
    FileReportCommand, ListPendingReportsQuery, MovieReport, ReportStatus, ResolveReportCommand,
    ResolveReportResult,
};
use movie_catalog_lib::modules::movie::Movie;
use movie_catalog_lib::modules::rating::SubmitRatingCommand;
use movie_catalog_lib::shared::application::{Query, UseCase};
use movie_catalog_lib::shared::errors::{AppError, AppResult};
use utils::factories::{MovieDraftFactory, UserFactory};
use utils::helpers::{build_in_memory_app, TestApp};
use uuid::Uuid;

struct Cast {
    admin: Caller,
    alice: Caller,
    bob: Caller,
}

fn cast(app: &TestApp) -> Cast {
    let admin = UserFactory::new().username("admin").admin().build();
    let alice = UserFactory::new().username("alice").build();
    let bob = UserFactory::new().username("bob").build();
    for user in [&admin, &alice, &bob] {
        app.store.insert_user(user.clone());
    }

    Cast {
        admin: admin.to_caller(),
        alice: alice.to_caller(),
        bob: bob.to_caller(),
    }
}

async fn create_movie(app: &TestApp, owner: &Caller) -> Movie {
    app.state
        .movies
        .create_movie(owner, MovieDraftFactory::new().build())
        .await
        .unwrap()
}

async fn file(app: &TestApp, reporter: &Caller, movie_id: Uuid, reason: &str) -> AppResult<MovieReport> {
    app.state
        .file_report
        .execute(Authorized::new(
            reporter.clone(),
            FileReportCommand::new(movie_id, reason),
        ))
        .await
        .map(|result| result.report)
}

async fn resolve(
    app: &TestApp,
    actor: &Caller,
    report_id: Uuid,
    status: &str,
) -> AppResult<ResolveReportResult> {
    app.state
        .resolve_report
        .execute(Authorized::new(
            actor.clone(),
            ResolveReportCommand::new(report_id, status),
        ))
        .await
}

async fn pending(app: &TestApp, actor: &Caller) -> AppResult<Vec<MovieReport>> {
    app.state
        .list_pending_reports
        .execute(Authorized::new(actor.clone(), ListPendingReportsQuery))
        .await
        .map(|result| result.reports)
}

#[tokio::test]
async fn reporting_missing_movie_creates_nothing() {
    let app = build_in_memory_app();
    let people = cast(&app);

    let result = file(&app, &people.alice, Uuid::new_v4(), "Spam").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(app.store.reports().is_empty());
}

#[tokio::test]
async fn blank_reason_is_a_validation_error() {
    let app = build_in_memory_app();
    let people = cast(&app);
    let movie = create_movie(&app, &people.bob).await;

    let result = file(&app, &people.alice, movie.id, "   ").await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    assert!(app.store.reports().is_empty());
}

#[tokio::test]
async fn same_user_may_report_twice() {
    let app = build_in_memory_app();
    let people = cast(&app);
    let movie = create_movie(&app, &people.bob).await;

    file(&app, &people.alice, movie.id, "Spam").await.unwrap();
    file(&app, &people.alice, movie.id, "Still spam").await.unwrap();

    assert_eq!(pending(&app, &people.admin).await.unwrap().len(), 2);
}

#[tokio::test]
async fn non_admin_cannot_list_or_resolve() {
    let app = build_in_memory_app();
    let people = cast(&app);
    let movie = create_movie(&app, &people.bob).await;
    let report = file(&app, &people.alice, movie.id, "Offensive").await.unwrap();

    assert!(matches!(
        pending(&app, &people.alice).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        resolve(&app, &people.alice, report.id, "APPROVED").await,
        Err(AppError::Forbidden(_))
    ));
    // Forbidden wins over every other failure
    assert!(matches!(
        resolve(&app, &people.bob, Uuid::new_v4(), "garbage").await,
        Err(AppError::Forbidden(_))
    ));

    assert_eq!(app.store.reports()[0].status, ReportStatus::Pending);
}

#[tokio::test]
async fn resolution_validates_status_then_existence() {
    let app = build_in_memory_app();
    let people = cast(&app);
    let movie = create_movie(&app, &people.bob).await;
    let report = file(&app, &people.alice, movie.id, "Offensive").await.unwrap();

    for bad in ["PENDING", "DELETED", ""] {
        assert!(matches!(
            resolve(&app, &people.admin, report.id, bad).await,
            Err(AppError::ValidationError(_))
        ));
    }
    assert!(matches!(
        resolve(&app, &people.admin, Uuid::new_v4(), "REJECTED").await,
        Err(AppError::NotFound(_))
    ));

    assert_eq!(app.store.reports()[0].status, ReportStatus::Pending);
}

#[tokio::test]
async fn re_resolving_overwrites_the_previous_outcome() {
    let app = build_in_memory_app();
    let people = cast(&app);
    let movie = create_movie(&app, &people.bob).await;
    let report = file(&app, &people.alice, movie.id, "Offensive").await.unwrap();

    let first = resolve(&app, &people.admin, report.id, "REJECTED").await.unwrap();
    assert_eq!(first.status, ReportStatus::Rejected);
    assert_eq!(first.message, "Report rejected successfully.");

    let second = resolve(&app, &people.admin, report.id, "approved").await.unwrap();
    assert_eq!(second.previous_status, ReportStatus::Rejected);
    assert_eq!(second.status, ReportStatus::Approved);
    assert_eq!(app.store.reports()[0].status, ReportStatus::Approved);
    assert!(pending(&app, &people.admin).await.unwrap().is_empty());
}

#[tokio::test]
async fn full_rating_and_moderation_walkthrough() {
    let app = build_in_memory_app();
    let people = cast(&app);
    let movie = create_movie(&app, &people.bob).await;
    assert_eq!(movie.average_rating, 0.0);

    let rate = |caller: &Caller, score: i32| {
        let state = app.state.clone();
        let request = Authorized::new(caller.clone(), SubmitRatingCommand::new(movie.id, score));
        async move { state.submit_rating.execute(request).await }
    };

    assert_eq!(rate(&people.alice, 5).await.unwrap().average_rating, 5.0);
    assert_eq!(rate(&people.bob, 3).await.unwrap().average_rating, 4.0);
    assert_eq!(app.store.movie(movie.id).unwrap().average_rating, 4.0);

    let report = file(&app, &people.alice, movie.id, "Misleading poster").await.unwrap();
    assert_eq!(report.status, ReportStatus::Pending);
    assert_eq!(pending(&app, &people.admin).await.unwrap(), vec![report.clone()]);

    let resolved = resolve(&app, &people.admin, report.id, "APPROVED").await.unwrap();
    assert_eq!(resolved.status, ReportStatus::Approved);
    assert_eq!(resolved.message, "Report approved successfully.");
    assert_eq!(app.store.reports()[0].status, ReportStatus::Approved);
}
