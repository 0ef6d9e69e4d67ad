/// Both fields are raw request input. The handler parses them, so an
/// administrator gate wrapped around it answers before any parse error.
#[derive(Debug, Clone)]
pub struct ResolveReportCommand {
    pub report_id: String,
    pub status: String,
}

impl ResolveReportCommand {
    pub fn new(report_id: impl ToString, status: impl Into<String>) -> Self {
        Self {
            report_id: report_id.to_string(),
            status: status.into(),
        }
    }
}
