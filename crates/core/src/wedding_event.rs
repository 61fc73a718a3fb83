//! Validation rules for wedding events created outside the wizard.

use crate::error::CoreError;
use crate::types::Date;

/// Longest accepted event title.
pub const MAX_TITLE_LEN: usize = 200;

/// Validate the fields required to create an event.
pub fn validate_new_event(title: &str, start_date: Date, end_date: Date) -> Result<(), CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("Event title must not be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Event title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    if end_date < start_date {
        return Err(CoreError::Validation(format!(
            "End date {end_date} is before start date {start_date}"
        )));
    }
    Ok(())
}
