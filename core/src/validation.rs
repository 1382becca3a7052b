// Validation logic for PlantUML source

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter PlantUML code")]
    EmptyContent,

    #[error("Please set the backend server URL")]
    MissingServerUrl,
}

/// Validate PlantUML source and return the text that should be rendered.
///
/// # Rules
/// - Leading and trailing whitespace is dropped
/// - What remains must not be empty
///
/// Note: @startuml/@enduml tags are NOT validated here.
/// The renderer produces an error image if tags are missing.
pub fn validate_plantuml_source(content: &str) -> Result<&str, ValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(trimmed)
}

/// Validate the local rendering server URL typed by the user
pub fn validate_server_url(url: &str) -> Result<&str, ValidationError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingServerUrl);
    }
    Ok(trimmed)
}
