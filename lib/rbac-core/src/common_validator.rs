use crate::config::core_config::ValidationConfig;
use crate::service::error::ValidationError;

/// Checks a required, human readable `name` and returns it trimmed.
pub(crate) fn validate_name(
    field: &'static str,
    name: Option<String>,
    config: &ValidationConfig,
) -> Result<String, ValidationError> {
    let name = name.ok_or(ValidationError::MissingField(field))?;
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    if name.chars().count() > config.max_name_length {
        return Err(ValidationError::FieldTooLong {
            field,
            max: config.max_name_length,
        });
    }

    Ok(name.to_owned())
}
