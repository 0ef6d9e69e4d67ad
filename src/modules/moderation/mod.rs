//! Report moderation: users flag movies, administrators resolve the flags.
pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::use_cases::{
    FileReportCommand, FileReportHandler, FileReportResult, ListPendingReportsHandler,
    ListPendingReportsQuery, ListPendingReportsResult, ResolveReportCommand, ResolveReportHandler,
    ResolveReportResult,
};
pub use domain::{MovieReport, ReportRepository, ReportStatus};
pub use infrastructure::ReportRepositoryImpl;
