//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that API base URLs are absolute http(s) URLs
//! - Validate value ranges (timeouts > 0)
//!
//! All problems are collected and returned together.

use thiserror::Error;
use url::Url;

use crate::config::schema::HbnbConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("{field} must use http or https, got {scheme}")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &HbnbConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_url("api.base_url", &config.api.base_url, &mut errors);
    check_url("api.status_base_url", &config.api.status_base_url, &mut errors);

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "timeouts.connect_secs" });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "timeouts.request_secs" });
    }

    if config.page.output_path.trim().is_empty() {
        errors.push(ValidationError::Empty { field: "page.output_path" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(value) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme {
                    field,
                    scheme: url.scheme().to_string(),
                });
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUrl {
            field,
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&HbnbConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_relative_url() {
        let mut config = HbnbConfig::default();
        config.api.base_url = "api/v1".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidUrl { field: "api.base_url", .. }));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = HbnbConfig::default();
        config.api.status_base_url = "ws://0.0.0.0:5001".to_string();
        config.timeouts.connect_secs = 0;
        config.page.output_path = "  ".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors[0],
            ValidationError::UnsupportedScheme {
                field: "api.status_base_url",
                scheme: "ws".to_string(),
            }
        );
        assert_eq!(errors[1].to_string(), "timeouts.connect_secs must be greater than zero");
    }
}
