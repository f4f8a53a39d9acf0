use validator::{ValidateUrl, ValidationError, ValidationErrors};

pub const AUTHOR_MAX_CHARS: usize = 100;
pub const IMAGE_MAX_CHARS: usize = 500;

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("This field may not be blank.".into()));
    }
    Ok(())
}

pub fn valid_author(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.trim().chars().count() > AUTHOR_MAX_CHARS {
        return Err(ValidationError::new("length").with_message(
            format!("Ensure this field has no more than {} characters.", AUTHOR_MAX_CHARS).into(),
        ));
    }
    Ok(())
}

/// Blank is accepted and later stored as null.
pub fn valid_image_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().count() > IMAGE_MAX_CHARS {
        return Err(ValidationError::new("length").with_message(
            format!("Ensure this field has no more than {} characters.", IMAGE_MAX_CHARS).into(),
        ));
    }
    if !value.validate_url() {
        return Err(ValidationError::new("url").with_message("Enter a valid URL.".into()));
    }
    Ok(())
}

/// Collects a single field check into `errors`.
pub fn check(
    errors: &mut ValidationErrors,
    field: &'static str,
    result: Result<(), ValidationError>,
) {
    if let Err(error) = result {
        errors.add(field, error);
    }
}
