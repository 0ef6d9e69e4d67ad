pub mod file_report;
pub mod list_pending_reports;
pub mod resolve_report;

pub use file_report::{FileReportCommand, FileReportHandler, FileReportResult};
pub use list_pending_reports::{
    ListPendingReportsHandler, ListPendingReportsQuery, ListPendingReportsResult,
};
pub use resolve_report::{ResolveReportCommand, ResolveReportHandler, ResolveReportResult};
