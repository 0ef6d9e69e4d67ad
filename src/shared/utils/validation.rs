use crate::shared::errors::AppError;

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_LABEL_LEN: usize = 100;
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

pub struct Validator;

impl Validator {
    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::ValidationError(format!(
                "Title too long (max {} characters)",
                MAX_TITLE_LEN
            )));
        }
        Ok(())
    }

    /// Genre and language share the same column constraints.
    pub fn validate_label(field: &str, value: &str) -> Result<(), AppError> {
        if value.chars().count() > MAX_LABEL_LEN {
            return Err(AppError::ValidationError(format!(
                "{} too long (max {} characters)",
                field, MAX_LABEL_LEN
            )));
        }
        Ok(())
    }

    pub fn validate_duration(minutes: i32) -> Result<(), AppError> {
        if minutes < 0 {
            return Err(AppError::ValidationError(
                "Duration cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_score(score: i32) -> Result<(), AppError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(AppError::ValidationError(format!(
                "Score must be between {} and {}",
                MIN_SCORE, MAX_SCORE
            )));
        }
        Ok(())
    }

    pub fn validate_report_reason(reason: &str) -> Result<(), AppError> {
        if reason.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Reason cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_pagination(page: u32, page_size: u32) -> Result<(), AppError> {
        if page == 0 {
            return Err(AppError::ValidationError(
                "Page must be at least 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(AppError::ValidationError(
                "Page size must be positive".to_string(),
            ));
        }
        if page_size > 100 {
            return Err(AppError::ValidationError(
                "Page size cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}
