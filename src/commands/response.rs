use serde::Serialize;

/// Confirmation envelope for mutating endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> MessageResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
