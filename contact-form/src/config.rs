//! Form configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Presentation and rule parameters of the contact form.
///
/// Every key is optional when loaded from JSON; missing keys keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Heading shown above the form.
    pub title: String,

    /// Minimum characters for the first name.
    pub first_name_min_length: usize,

    /// Minimum characters for the last name.
    pub last_name_min_length: usize,

    /// Text of the submit button.
    pub submit_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "Contact Form".to_string(),
            first_name_min_length: 5,
            last_name_min_length: 5,
            submit_label: "Submit".to_string(),
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the minimum length of both name fields.
    pub fn min_name_length(mut self, min: usize) -> Self {
        self.first_name_min_length = min;
        self.last_name_min_length = min;
        self
    }

    /// Set the submit button text.
    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded form config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.title, "Contact Form");
        assert_eq!(config.first_name_min_length, 5);
        assert_eq!(config.last_name_min_length, 5);
        assert_eq!(config.submit_label, "Submit");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FormConfig::from_json(r#"{ "lastNameMinLength": 2 }"#).unwrap();
        assert_eq!(config.last_name_min_length, 2);
        assert_eq!(config.first_name_min_length, 5);
        assert_eq!(config.title, "Contact Form");
    }

    #[test]
    fn test_invalid_json() {
        let err = FormConfig::from_json("{ title: ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_builder() {
        let config = FormConfig::new()
            .title("Get in touch")
            .min_name_length(3)
            .submit_label("Send");
        assert_eq!(config.title, "Get in touch");
        assert_eq!(config.first_name_min_length, 3);
        assert_eq!(config.last_name_min_length, 3);
        assert_eq!(config.submit_label, "Send");
    }

    #[test]
    fn test_load_missing_file() {
        let err = FormConfig::load("/nonexistent/contact-form/config.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
