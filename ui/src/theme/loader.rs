use crate::error::{AppError, AppResult};
use crate::theme::types::{Palette, ThemeConfig, ThemeFile, ThemePreference};
use crate::theme::validation::{ThemeValidationError, ThemeValidator};
use server::validation::Validator;
use std::fs;
use std::path::PathBuf;

const LIGHT_PALETTE: &str = include_str!("../../themes/light.toml");
const DARK_PALETTE: &str = include_str!("../../themes/dark.toml");

/// Loads the palette for a preference, from a configured file or the built-in one.
#[derive(Debug, Clone, Default)]
pub struct ThemeLoader {
    light_file: Option<PathBuf>,
    dark_file: Option<PathBuf>,
    validator: ThemeValidator,
}

impl ThemeLoader {
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            light_file: config.palette_file(ThemePreference::Light),
            dark_file: config.palette_file(ThemePreference::Dark),
            validator: ThemeValidator,
        }
    }

    /// The built-in palettes only.
    pub fn embedded() -> Self {
        Self::default()
    }

    pub fn load(&self, preference: ThemePreference) -> AppResult<Palette> {
        let custom = match preference {
            ThemePreference::Light => self.light_file.as_ref(),
            ThemePreference::Dark => self.dark_file.as_ref(),
        };

        let (origin, source) = match custom {
            Some(path) => {
                let source = fs::read_to_string(path).map_err(|e| {
                    AppError::Theme(format!(
                        "Failed to read theme file '{}': {e}",
                        path.display()
                    ))
                })?;
                (path.display().to_string(), source)
            }
            None => (format!("built-in {preference} theme"), Self::embedded_source(preference).to_string()),
        };

        let theme: ThemeFile = toml::from_str(&source)
            .map_err(|e| AppError::Theme(format!("Failed to parse theme file '{origin}': {e}")))?;

        match self.validator.validate(&theme) {
            Ok(()) => {}
            // Bad colours fall back individually, a broken file does not stop the app
            Err(error @ ThemeValidationError::InvalidColors { .. }) => {
                log::warn!("Theme '{origin}': {}", error.user_message());
            }
            Err(error) => return Err(error.into()),
        }

        log::debug!("Loaded {preference} palette '{}' from {origin}", theme.metadata.name);
        Ok(Palette::from_colors(preference, &theme.colors))
    }

    pub fn embedded_source(preference: ThemePreference) -> &'static str {
        match preference {
            ThemePreference::Light => LIGHT_PALETTE,
            ThemePreference::Dark => DARK_PALETTE,
        }
    }
}
