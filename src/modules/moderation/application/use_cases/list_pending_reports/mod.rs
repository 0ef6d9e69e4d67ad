mod handler;
mod query;
mod result;

pub use handler::ListPendingReportsHandler;
pub use query::ListPendingReportsQuery;
pub use result::ListPendingReportsResult;
