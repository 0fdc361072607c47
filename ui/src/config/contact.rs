use serde::Deserialize;
use server::contact::TransportConfig;
use server::contact::transport::DEFAULT_ENDPOINT;
use std::time::Duration;

/// Email service credentials and contact feedback timings.
///
/// The credentials are fixed, non-user values; leave them in `.env` or the
/// environment (`FOLIO__CONTACT__SERVICE_ID`, ...) rather than in a committed file.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ContactConfig {
    endpoint: Option<String>,
    service_id: Option<String>,
    template_id: Option<String>,
    access_token: Option<String>,
    timeout_secs: Option<u64>,
    sent_display_secs: Option<u64>,
    toast_secs: Option<u64>,
}

impl ContactConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn service_id(&self) -> &str {
        self.service_id.as_deref().unwrap_or_default()
    }

    pub fn template_id(&self) -> &str {
        self.template_id.as_deref().unwrap_or_default()
    }

    pub fn access_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(15))
    }

    /// How long the form shows its sent state.
    pub fn sent_display(&self) -> Duration {
        Duration::from_secs(self.sent_display_secs.unwrap_or(3))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_secs.unwrap_or(5))
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig::new(self.service_id(), self.template_id(), self.access_token())
            .with_endpoint(self.endpoint())
            .with_timeout(self.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_config_carries_credentials() {
        let config: ContactConfig = toml::from_str(
            "service_id = \"svc\"\ntemplate_id = \"tpl\"\naccess_token = \"key\"\ntimeout_secs = 7",
        )
        .unwrap();

        let transport = config.transport_config();
        assert_eq!(transport.service_id, "svc");
        assert_eq!(transport.template_id, "tpl");
        assert_eq!(transport.access_token, "key");
        assert_eq!(transport.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(transport.timeout, Duration::from_secs(7));
        assert!(transport.missing_fields().is_empty());
    }

    #[test]
    fn test_unset_credentials_are_blank() {
        let transport = ContactConfig::default().transport_config();
        assert_eq!(
            transport.missing_fields(),
            vec!["service_id", "template_id", "access_token"]
        );
    }
}
