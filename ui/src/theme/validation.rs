use crate::error::AppError;
use crate::theme::types::{ThemeFile, parse_color};
use server::validation::Validator;

/// Validation errors specific to palette files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValidationError {
    MissingMetadata { field: String },
    InvalidColors { keys: Vec<String> },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::MissingMetadata { field } => {
                format!(
                    "Missing theme metadata: '{field}'\n\n\
                    Please ensure the theme file contains all required metadata fields."
                )
            }
            ThemeValidationError::InvalidColors { keys } => {
                format!(
                    "Invalid colours: {}\n\n\
                    Use '#rrggbb' or a terminal colour name. Built-in fallbacks are used meanwhile.",
                    keys.join(", ")
                )
            }
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Theme(error.user_message())
    }
}

/// Checks that a palette file is complete and every colour parses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeValidator;

impl Validator<ThemeFile> for ThemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &ThemeFile) -> Result<(), Self::Error> {
        if input.metadata.name.trim().is_empty() {
            return Err(ThemeValidationError::MissingMetadata {
                field: "name".to_string(),
            });
        }

        let keys: Vec<String> = input
            .colors
            .entries()
            .into_iter()
            .filter(|(_, value)| parse_color(value).is_none())
            .map(|(key, _)| key.to_string())
            .collect();

        if keys.is_empty() {
            Ok(())
        } else {
            Err(ThemeValidationError::InvalidColors { keys })
        }
    }
}
