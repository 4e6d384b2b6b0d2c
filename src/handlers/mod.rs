pub mod export;
pub mod questions;
pub mod responses;
pub mod session;

use crate::error::HandraiseError;

/// Reject blank submission fields before any service call is made; the
/// service layer itself performs no validation.
pub(crate) fn require_non_empty(value: &str, field: &'static str) -> Result<(), HandraiseError> {
    if value.trim().is_empty() {
        return Err(HandraiseError::EmptyField(field));
    }
    Ok(())
}
