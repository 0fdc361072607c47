use super::{
    LoggingConfig, animation::AnimationConfig, contact::ContactConfig, keys::KeyBindingsConfig,
    limits::*, navigation::NavigationConfig, validation::ConfigValidationError,
};
use crate::theme::types::ThemeConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    poll_timeout_ms: Option<u64>,
    tick_interval_millis: Option<u64>,
    content_file: Option<String>,

    #[serde(default)]
    keys: KeyBindingsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    animation: AnimationConfig,
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    contact: ContactConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let tick = self.tick_interval_millis.unwrap_or(DEFAULT_TICK_INTERVAL_MS);
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick) {
            errors.push(ConfigValidationError::TickInterval {
                configured: tick,
                min_limit: MIN_TICK_INTERVAL_MS,
                max_limit: MAX_TICK_INTERVAL_MS,
            });
        }

        let threshold = self.navigation.active_threshold();
        if !(threshold > 0.0 && threshold <= 1.0) {
            errors.push(ConfigValidationError::ActiveThreshold {
                configured: threshold,
            });
        }

        let reveal = self.animation.reveal_duration().as_millis() as u64;
        if !(MIN_REVEAL_DURATION_MS..=MAX_REVEAL_DURATION_MS).contains(&reveal) {
            errors.push(ConfigValidationError::RevealDuration {
                configured: reveal,
                min_limit: MIN_REVEAL_DURATION_MS,
                max_limit: MAX_REVEAL_DURATION_MS,
            });
        }

        let timeout = self.contact.timeout().as_secs();
        if !(MIN_CONTACT_TIMEOUT_SECS..=MAX_CONTACT_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::ContactTimeout {
                configured: timeout,
                min_limit: MIN_CONTACT_TIMEOUT_SECS,
                max_limit: MAX_CONTACT_TIMEOUT_SECS,
            });
        }

        let endpoint = self.contact.endpoint();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            errors.push(ConfigValidationError::ContactEndpoint {
                configured: endpoint.to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(10))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(10)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(10))
    }

    /// Animation frame interval.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_millis
                .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }

    /// Portfolio content file, `None` means the built-in content.
    pub fn content_file(&self) -> Option<PathBuf> {
        self.content_file
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Copy of this configuration with every animation turned off.
    pub fn without_animations(&self) -> Self {
        Self {
            animation: self.animation.disabled(),
            ..self.clone()
        }
    }

    // Configuration section accessors
    pub fn keys(&self) -> &KeyBindingsConfig {
        &self.keys
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    pub fn navigation(&self) -> &NavigationConfig {
        &self.navigation
    }

    pub fn contact(&self) -> &ContactConfig {
        &self.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_source: &str) -> AppConfig {
        toml::from_str(toml_source).expect("valid test config")
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_all_violations_are_collected() {
        let config = parse(
            r#"
            tick_interval_millis = 0
            [navigation]
            active_threshold = 1.5
            [animation]
            reveal_duration_ms = 5000
            [contact]
            timeout_secs = 0
            endpoint = "ftp://mail"
            "#,
        );

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ConfigValidationError::TickInterval { .. }));
        assert!(matches!(
            errors[4],
            ConfigValidationError::ContactEndpoint { .. }
        ));
    }

    #[test]
    fn test_blank_content_file_means_embedded() {
        assert_eq!(parse("content_file = \"  \"").content_file(), None);
        assert_eq!(
            parse("content_file = \"me.toml\"").content_file(),
            Some(PathBuf::from("me.toml"))
        );
    }
}
