//! Configuration validation rules.
//!
//! - A base root must be configured
//! - The extension must be non-empty and carry no leading dot
//! - The default base must be a single path segment
//! - Search paths must be non-empty

use crate::config::schema::FlexlocConfig;
use crate::error::{FlexlocError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Layout base or search path the error is about
    pub subject: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>, subject: Option<&str>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
            subject: subject.map(str::to_string),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &FlexlocConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_roots(config));
    errors.extend(validate_settings(config));
    errors.extend(validate_search_paths(config));

    errors
}

fn validate_roots(config: &FlexlocConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.roots.base.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "missing-base-root",
            "'roots.base' must name the base template directory",
            None,
        ));
    }

    errors
}

fn validate_settings(config: &FlexlocConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let settings = &config.settings;

    if settings.extension.is_empty() {
        errors.push(ValidationError::new(
            "empty-extension",
            "'settings.extension' must not be empty",
            None,
        ));
    } else if settings.extension.starts_with('.') {
        errors.push(ValidationError::new(
            "dotted-extension",
            format!(
                "'settings.extension' should be '{}' without the leading dot",
                settings.extension.trim_start_matches('.')
            ),
            None,
        ));
    }

    if settings.default_base.is_empty() || settings.default_base.contains(['/', '\\']) {
        errors.push(ValidationError::new(
            "invalid-default-base",
            format!(
                "'settings.default_base' must be a single name, got '{}'",
                settings.default_base
            ),
            Some(&settings.default_base),
        ));
    }

    errors
}

fn validate_search_paths(config: &FlexlocConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, entry) in config.search_paths.iter().enumerate() {
        if entry.path.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-search-path",
                format!("Search path {} has an empty 'path'", index),
                entry.key.as_deref(),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &FlexlocConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(FlexlocError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
