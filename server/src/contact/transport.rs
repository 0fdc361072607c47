use super::flow::SubmissionTicket;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Default EmailJS REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Longest response body kept for diagnostics.
const MAX_BODY_IN_ERROR: usize = 200;

/// Failures of the outbound delivery call.
///
/// The call either fully succeeds or fully fails, there is no partial state.
/// None of these are retried automatically; the user resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Failed to create HTTP client: {0}")]
    ClientCreation(String),

    #[error("Email service is not configured: {0}")]
    NotConfigured(String),

    #[error("Request to {url} timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("Email service answered with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Fixed, non-user credentials and endpoint of the email service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub access_token: String,
    pub timeout: Duration,
}

impl TransportConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            access_token: access_token.into(),
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Names of the credentials that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("endpoint", &self.endpoint),
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("access_token", &self.access_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// JSON body of one delivery request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl OutboundMessage {
    pub fn new(config: &TransportConfig, ticket: &SubmissionTicket) -> Self {
        let draft = ticket.draft();
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.access_token.clone(),
            template_params: TemplateParams {
                name: draft.name.trim().to_string(),
                email: draft.email.trim().to_string(),
                message: draft.message.trim().to_string(),
            },
        }
    }
}

/// The seam between the submission flow and the outside world.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Perform exactly one delivery attempt.
    async fn deliver(&self, ticket: &SubmissionTicket) -> Result<(), TransportError>;
}

/// Delivers contact messages through an EmailJS-compatible REST endpoint.
pub struct EmailJsTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl EmailJsTransport {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let missing = config.missing_fields();
        if !missing.is_empty() {
            return Err(TransportError::NotConfigured(format!(
                "missing {}",
                missing.join(", ")
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::ClientCreation(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn map_send_error(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout {
                url: self.config.endpoint.clone(),
                seconds: self.config.timeout.as_secs(),
            }
        } else {
            TransportError::Network {
                url: self.config.endpoint.clone(),
                reason: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl MessageTransport for EmailJsTransport {
    async fn deliver(&self, ticket: &SubmissionTicket) -> Result<(), TransportError> {
        let payload = OutboundMessage::new(&self.config, ticket);
        log::debug!(
            "Delivering contact message {} to {}",
            ticket.id(),
            self.config.endpoint
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status.is_success() {
            log::info!("Contact message {} delivered ({status})", ticket.id());
            return Ok(());
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_BODY_IN_ERROR {
            let mut cut = MAX_BODY_IN_ERROR;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        log::warn!(
            "Contact message {} rejected with status {status}",
            ticket.id()
        );
        Err(TransportError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactDraft;

    #[test]
    fn test_missing_credentials_are_reported() {
        let config = TransportConfig::new("service", "", " ");
        assert_eq!(config.missing_fields(), vec!["template_id", "access_token"]);
        assert!(matches!(
            EmailJsTransport::new(config),
            Err(TransportError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_payload_carries_credentials_and_trimmed_fields() {
        let config = TransportConfig::new("svc", "tpl", "token");
        let ticket = SubmissionTicket::new(ContactDraft::new(" Al ", "a@b.com ", "1234567890"));
        let payload = OutboundMessage::new(&config, &ticket);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["template_id"], "tpl");
        assert_eq!(json["user_id"], "token");
        assert_eq!(json["template_params"]["name"], "Al");
        assert_eq!(json["template_params"]["email"], "a@b.com");
        assert_eq!(json["template_params"]["message"], "1234567890");
    }
}
