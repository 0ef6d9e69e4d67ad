mod command;
mod handler;
mod result;

pub use command::FileReportCommand;
pub use handler::FileReportHandler;
pub use result::FileReportResult;
