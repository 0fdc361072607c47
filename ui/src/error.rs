use crate::components::common::{Msg, ToastMsg};
use crate::components::toast::{Toast, ToastKind};
use std::fmt::Display;
use std::sync::mpsc::Sender;

/// Application-wide error type of the terminal front end.
///
/// Library errors (`ContentError`, `TransportError`, `PreferenceError`, ...)
/// are converted into one of these variants at the boundary between the
/// headless core and the event loop. Most of them never reach the user: the
/// page degrades (built-in palette, no saved theme) and the failure is logged.
/// The ones that do are shown as toasts through [`ErrorReporter`].
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Mounting, rendering or focusing a component failed.
    Component(String),

    /// The model reached a state it cannot continue from.
    State(String),

    /// Configuration could not be loaded or failed validation.
    Config(String),

    /// Portfolio content could not be loaded.
    Content(String),

    /// A palette file is unreadable or incomplete.
    Theme(String),

    /// Contact delivery could not be started.
    Contact(String),

    /// The event loop channel is gone.
    Channel(String),

    /// Terminal or file system failures.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Component(msg) => write!(f, "Component Error: {msg}"),
            AppError::State(msg) => write!(f, "State Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Content(msg) => write!(f, "Content Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Contact(msg) => write!(f, "Contact Error: {msg}"),
            AppError::Channel(msg) => write!(f, "Channel Error: {msg}"),
            AppError::Io(msg) => write!(f, "IO Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<server::content::ContentError> for AppError {
    fn from(err: server::content::ContentError) -> Self {
        AppError::Content(err.to_string())
    }
}

impl From<server::contact::TransportError> for AppError {
    fn from(err: server::contact::TransportError) -> Self {
        AppError::Contact(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Logged and shown as an info toast
    Warning,
    /// Logged and shown as an error toast
    Error,
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: format!("Something went wrong in {component}"),
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Logs failures with their context and forwards a toast to the event loop.
#[derive(Clone)]
pub struct ErrorReporter {
    tx: Sender<Msg>,
}

impl ErrorReporter {
    pub fn new(tx: Sender<Msg>) -> Self {
        Self { tx }
    }

    /// Report an error with a generic context.
    pub fn report_simple(&self, error: AppError, component: &str, operation: &str) {
        self.report(error, ErrorContext::new(component, operation));
    }

    pub fn report_warning(&self, error: AppError, component: &str, operation: &str) {
        let context = ErrorContext::new(component, operation).with_severity(ErrorSeverity::Warning);
        self.report(error, context);
    }

    pub fn report(&self, error: AppError, context: ErrorContext) {
        match context.severity {
            ErrorSeverity::Warning => log::warn!(
                "[{}:{}] {} ({error})",
                context.component,
                context.operation,
                context.user_message
            ),
            ErrorSeverity::Error => log::error!(
                "[{}:{}] {} ({error})",
                context.component,
                context.operation,
                context.user_message
            ),
        }

        let kind = match context.severity {
            ErrorSeverity::Warning => ToastKind::Info,
            ErrorSeverity::Error => ToastKind::Error,
        };
        let toast = Toast::new(kind, context.user_message, context.suggestion);
        if let Err(e) = self.tx.send(Msg::Toast(ToastMsg::Show(toast))) {
            log::error!("Failed to send error toast: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_report_forwards_toast() {
        let (tx, rx) = mpsc::channel();
        let reporter = ErrorReporter::new(tx);

        reporter.report(
            AppError::Io("clipboard unavailable".to_string()),
            ErrorContext::new("Contact", "CopyEmail")
                .with_message("Could not copy the email address")
                .with_suggestion("Select it manually instead."),
        );

        let Ok(Msg::Toast(ToastMsg::Show(toast))) = rx.try_recv() else {
            panic!("expected a toast message");
        };
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Could not copy the email address");
        assert_eq!(toast.description.as_deref(), Some("Select it manually instead."));
    }

    #[test]
    fn test_warning_uses_info_toast() {
        let (tx, rx) = mpsc::channel();
        ErrorReporter::new(tx).report_warning(AppError::Theme("bad".into()), "Theme", "Toggle");

        let Ok(Msg::Toast(ToastMsg::Show(toast))) = rx.try_recv() else {
            panic!("expected a toast message");
        };
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[test]
    fn test_display_names_category() {
        let error: AppError = std::io::Error::other("disk full").into();
        assert_eq!(error.to_string(), "IO Error: disk full");
    }
}
