pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::movie_report::MovieReport;
pub use repositories::report_repository::ReportRepository;
pub use value_objects::report_status::ReportStatus;
