/// Query for the moderation queue
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPendingReportsQuery;
