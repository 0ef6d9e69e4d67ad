use uuid::Uuid;

/// Command for reporting a movie
#[derive(Debug, Clone)]
pub struct FileReportCommand {
    pub movie_id: Uuid,
    pub reason: String,
}

impl FileReportCommand {
    pub fn new(movie_id: Uuid, reason: impl Into<String>) -> Self {
        Self {
            movie_id,
            reason: reason.into(),
        }
    }
}
