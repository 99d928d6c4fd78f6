//! Field rules for category input.
//!
//! Used by the `#[validate(custom(...))]` attributes on the request DTOs in
//! `category-db`.

use std::borrow::Cow;

use validator::ValidationError;

/// Error code reported when a required text field is blank.
pub const REQUIRED: &str = "required";

/// A category name must contain at least one non-whitespace character.
///
/// The stored value is not trimmed; only the emptiness check is.
pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new(REQUIRED);
        err.message = Some(Cow::Borrowed("must not be empty"));
        return Err(err);
    }
    Ok(())
}
