use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::contact::{ContactMessage, FieldErrors};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("email relay is not configured: missing {0}")]
    NotConfigured(&'static str),
    #[error("message failed validation")]
    Invalid(FieldErrors),
    #[error("relay responded with {status}: {body}")]
    Status {
        status: http::StatusCode,
        body: String,
    },
    #[cfg(feature = "ssr")]
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub trait Relay: Send + Sync {
    fn send(&self, message: &ContactMessage)
        -> impl Future<Output = Result<(), RelayError>> + Send;
}

/// Validates before handing the message to the relay; invalid input is never sent.
pub async fn deliver<R: Relay>(relay: &R, message: &ContactMessage) -> Result<(), RelayError> {
    message.validate().map_err(RelayError::Invalid)?;
    relay.send(message).await
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(RelayError::NotConfigured(key))
        };
        Ok(Self {
            service_id: required("EMAILJS_SERVICE_ID")?,
            template_id: required("EMAILJS_TEMPLATE_ID")?,
            public_key: required("EMAILJS_PUBLIC_KEY")?,
            private_key: lookup("EMAILJS_PRIVATE_KEY").filter(|v| !v.trim().is_empty()),
            endpoint: lookup("EMAILJS_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TemplateParams<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub from_name: &'a str,
    pub reply_to: &'a str,
}

impl<'a> From<&'a ContactMessage> for TemplateParams<'a> {
    fn from(m: &'a ContactMessage) -> Self {
        Self {
            name: &m.name,
            email: &m.email,
            subject: &m.subject,
            message: &m.message,
            from_name: &m.name,
            reply_to: &m.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    pub fn new(config: &'a RelayConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            access_token: config.private_key.as_deref(),
            template_params: message.into(),
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

#[cfg(feature = "ssr")]
impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[cfg(feature = "ssr")]
impl Relay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&SendRequest::new(&self.config, message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Status { status, body });
        }
        Ok(())
    }
}

/// Shared, possibly absent relay handed to server functions through context.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug, Default)]
pub struct RelayHandle(Option<std::sync::Arc<EmailJsRelay>>);

#[cfg(feature = "ssr")]
impl RelayHandle {
    pub fn new(relay: EmailJsRelay) -> Self {
        Self(Some(std::sync::Arc::new(relay)))
    }

    pub fn disabled() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Result<&EmailJsRelay, RelayError> {
        self.0
            .as_deref()
            .ok_or(RelayError::NotConfigured("EMAILJS_* keys"))
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use super::*;

    struct FakeRelay {
        sent: Mutex<Vec<ContactMessage>>,
        fail: bool,
    }

    impl FakeRelay {
        fn new(fail: bool) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    impl Relay for FakeRelay {
        async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
            self.sent
                .lock()
                .expect("should be able to lock sent messages")
                .push(message.clone());
            if self.fail {
                Err(RelayError::Status {
                    status: http::StatusCode::BAD_REQUEST,
                    body: "The Public Key is invalid".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project idea".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_requires_keys() {
        let vars = env(&[
            ("EMAILJS_SERVICE_ID", "service_x"),
            ("EMAILJS_TEMPLATE_ID", "template_y"),
        ]);
        let err = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, RelayError::NotConfigured("EMAILJS_PUBLIC_KEY")));

        let vars = env(&[
            ("EMAILJS_SERVICE_ID", "service_x"),
            ("EMAILJS_TEMPLATE_ID", "template_y"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
            ("EMAILJS_PRIVATE_KEY", " "),
        ]);
        let config = RelayConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.private_key, None);
    }

    #[test]
    fn test_request_body() {
        let config = RelayConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pk".to_string(),
            private_key: Some("secret".to_string()),
        };
        let message = message();
        let body = serde_json::to_value(SendRequest::new(&config, &message)).unwrap();
        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["user_id"], "pk");
        assert_eq!(body["accessToken"], "secret");
        assert_eq!(body["template_params"]["from_name"], "Ada");
        assert_eq!(body["template_params"]["reply_to"], "ada@example.com");
        assert_eq!(body["template_params"]["subject"], "Project idea");

        let config = RelayConfig {
            private_key: None,
            ..config
        };
        let body = serde_json::to_value(SendRequest::new(&config, &message)).unwrap();
        assert!(body.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn test_deliver_sends_valid_message() {
        let relay = FakeRelay::new(false);
        deliver(&relay, &message()).await.unwrap();
        assert_eq!(relay.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deliver_never_sends_invalid_message() {
        let relay = FakeRelay::new(false);
        let invalid = ContactMessage {
            email: "bad".to_string(),
            ..message()
        };
        let err = deliver(&relay, &invalid).await.unwrap_err();
        assert!(matches!(err, RelayError::Invalid(ref e) if e.email.is_some()));
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deliver_surfaces_failure() {
        let relay = FakeRelay::new(true);
        let err = deliver(&relay, &message()).await.unwrap_err();
        assert!(matches!(err, RelayError::Status { status, .. } if status == 400));
    }
}
