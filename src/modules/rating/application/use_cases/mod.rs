pub mod submit_rating;

pub use submit_rating::{SubmitRatingCommand, SubmitRatingHandler, SubmitRatingResult};
