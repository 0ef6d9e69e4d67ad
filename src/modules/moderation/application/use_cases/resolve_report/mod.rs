mod command;
mod handler;
mod result;

pub use command::ResolveReportCommand;
pub use handler::ResolveReportHandler;
pub use result::ResolveReportResult;
