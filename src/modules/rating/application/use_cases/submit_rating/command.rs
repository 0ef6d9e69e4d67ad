use uuid::Uuid;

/// Command for rating a movie. `score` is raw input and is range-checked
/// by the handler.
#[derive(Debug, Clone)]
pub struct SubmitRatingCommand {
    pub movie_id: Uuid,
    pub score: i32,
}

impl SubmitRatingCommand {
    pub fn new(movie_id: Uuid, score: i32) -> Self {
        Self { movie_id, score }
    }
}
