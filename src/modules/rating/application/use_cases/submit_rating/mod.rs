mod command;
mod handler;
mod result;

pub use command::SubmitRatingCommand;
pub use handler::SubmitRatingHandler;
pub use result::SubmitRatingResult;
