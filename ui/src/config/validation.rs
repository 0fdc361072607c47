use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid tick_interval_millis: {configured} (min: {min_limit}, max: {max_limit})")]
    TickInterval {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid navigation.active_threshold: {configured} (must be in (0, 1])")]
    ActiveThreshold { configured: f32 },
    #[error(
        "Invalid animation.reveal_duration_ms: {configured} (min: {min_limit}, max: {max_limit})"
    )]
    RevealDuration {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid contact.timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    ContactTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid contact.endpoint: '{configured}' (must be an http(s) URL)")]
    ContactEndpoint { configured: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::TickInterval {
                configured,
                min_limit,
                max_limit,
            } => format!(
                "Animation frame interval out of range!\n\nYour configured value: {configured} ms\nValid range: {min_limit} - {max_limit} ms\n\nPlease update tick_interval_millis in config.toml."
            ),
            ConfigValidationError::ActiveThreshold { configured } => format!(
                "Active section threshold out of range!\n\nYour configured value: {configured}\nValid range: greater than 0, at most 1\n\nPlease update navigation.active_threshold in config.toml."
            ),
            ConfigValidationError::RevealDuration {
                configured,
                min_limit,
                max_limit,
            } => format!(
                "Reveal animation duration out of range!\n\nYour configured value: {configured} ms\nValid range: {min_limit} - {max_limit} ms\n\nPlease update animation.reveal_duration_ms in config.toml."
            ),
            ConfigValidationError::ContactTimeout {
                configured,
                min_limit,
                max_limit,
            } => format!(
                "Contact request timeout out of range!\n\nYour configured value: {configured} seconds\nValid range: {min_limit} - {max_limit} seconds\n\nPlease update contact.timeout_secs in config.toml."
            ),
            ConfigValidationError::ContactEndpoint { configured } => format!(
                "Contact endpoint is not a web address!\n\nYour configured value: {configured}\n\nPlease set contact.endpoint to an http:// or https:// URL."
            ),
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
