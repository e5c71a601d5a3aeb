use serde::Serialize;
use thiserror::Error;

/// Third-party message-delivery endpoint the contact form posts to.
pub const DELIVERY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The three user-entered fields, captured at submit time and discarded once
/// the dispatch attempt resolves. Field validation is left to the browser's
/// native `required`/email checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Static delivery-service configuration. Credentials are injected at build
/// time rather than hard-coded in the client source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl DeliveryConfig {
    /// Reads the credentials baked in at compile time via
    /// `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY`.
    /// Returns `None` when the build did not provide all three.
    pub fn from_build_env() -> Option<Self> {
        Self::new(
            option_env!("EMAILJS_SERVICE_ID")?,
            option_env!("EMAILJS_TEMPLATE_ID")?,
            option_env!("EMAILJS_PUBLIC_KEY")?,
        )
        .ok()
    }

    pub fn new(
        service_id: &str,
        template_id: &str,
        public_key: &str,
    ) -> Result<Self, ContactError> {
        if service_id.trim().is_empty()
            || template_id.trim().is_empty()
            || public_key.trim().is_empty()
        {
            return Err(ContactError::MissingConfig);
        }
        Ok(Self {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Delivery service credentials are not configured")]
    MissingConfig,
    #[error("Couldn't reach the delivery service: {0}")]
    Transport(String),
    #[error("Delivery service rejected the message (status {0})")]
    Rejected(u16),
}

/// Contact form dispatch lifecycle. `Success` and `Failure` are terminal for
/// one attempt; the next user submission moves straight back through
/// `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

impl DispatchState {
    /// Starts a new attempt. A submission already in flight is left alone so
    /// a double-submit cannot spawn a second request.
    pub fn begin(self) -> Self {
        if self.is_in_flight() {
            self
        } else {
            DispatchState::Submitting
        }
    }

    /// Resolves the in-flight attempt. Resolution outside `Submitting` is
    /// ignored.
    pub fn resolve(self, delivered: bool) -> Self {
        match self {
            DispatchState::Submitting if delivered => DispatchState::Success,
            DispatchState::Submitting => DispatchState::Failure,
            other => other,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, DispatchState::Submitting)
    }
}

/// Wire payload for the delivery endpoint.
#[derive(Debug, Serialize)]
pub struct DeliveryRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    message: &'a str,
}

impl<'a> DeliveryRequest<'a> {
    pub fn new(config: &'a DeliveryConfig, submission: &'a ContactSubmission) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                user_name: &submission.name,
                user_email: &submission.email,
                message: &submission.message,
            },
        }
    }
}

/// Posts `submission` to the delivery service. Exactly one attempt: no retry,
/// no backoff, and no internal timeout (callers may wrap the future in their
/// own). The response body is consumed only for logging.
pub async fn send_message(
    config: &DeliveryConfig,
    submission: &ContactSubmission,
) -> Result<(), ContactError> {
    let request = DeliveryRequest::new(config, submission);
    let response = reqwest::Client::new()
        .post(DELIVERY_ENDPOINT)
        .json(&request)
        .send()
        .await
        .map_err(|e| ContactError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if status.is_success() {
        log::info!("delivery service response: {body}");
        Ok(())
    } else {
        log::error!("delivery service rejected message ({status}): {body}");
        Err(ContactError::Rejected(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
        }
    }

    #[test]
    fn test_dispatch_success_path() {
        let state = DispatchState::Idle;
        let state = state.begin();
        assert_eq!(state, DispatchState::Submitting);
        assert!(state.is_in_flight());

        let state = state.resolve(true);
        assert_eq!(state, DispatchState::Success);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_dispatch_failure_path() {
        let state = DispatchState::Idle.begin().resolve(false);
        assert_eq!(state, DispatchState::Failure);
    }

    #[test]
    fn test_terminal_states_allow_resubmission() {
        // Both terminal states go straight back through Submitting on the
        // next user submission.
        assert_eq!(DispatchState::Success.begin(), DispatchState::Submitting);
        assert_eq!(DispatchState::Failure.begin(), DispatchState::Submitting);
    }

    #[test]
    fn test_resolution_outside_submitting_is_ignored() {
        assert_eq!(DispatchState::Idle.resolve(true), DispatchState::Idle);
        assert_eq!(
            DispatchState::Success.resolve(false),
            DispatchState::Success
        );
    }

    #[test]
    fn test_config_rejects_blank_values() {
        assert!(DeliveryConfig::new("service", "template", "key").is_ok());
        assert_eq!(
            DeliveryConfig::new("", "template", "key"),
            Err(ContactError::MissingConfig)
        );
        assert_eq!(
            DeliveryConfig::new("service", "  ", "key"),
            Err(ContactError::MissingConfig)
        );
        assert_eq!(
            DeliveryConfig::new("service", "template", ""),
            Err(ContactError::MissingConfig)
        );
    }

    #[test]
    fn test_delivery_request_payload_shape() {
        let config = DeliveryConfig::new("service_abc", "template_xyz", "key_123").unwrap();
        let submission = submission();
        let request = DeliveryRequest::new(&config, &submission);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["service_id"], "service_abc");
        assert_eq!(value["template_id"], "template_xyz");
        assert_eq!(value["user_id"], "key_123");
        assert_eq!(value["template_params"]["user_name"], "Ada Lovelace");
        assert_eq!(value["template_params"]["user_email"], "ada@example.com");
        assert_eq!(value["template_params"]["message"], "Hello!");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::Rejected(429).to_string(),
            "Delivery service rejected the message (status 429)"
        );
        assert!(ContactError::Transport("connection reset".to_string())
            .to_string()
            .contains("connection reset"));
    }
}
