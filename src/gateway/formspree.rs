//! HTTP client for Formspree form endpoints
//!
//! Each form posts to its own `{base}/f/{form_id}` URL with a
//! form-urlencoded body. Any 2xx response counts as accepted.

use super::traits::{SubmissionError, SubmissionGateway};
use crate::state::FormValues;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Default Formspree host
pub const DEFAULT_ENDPOINT_BASE: &str = "https://formspree.io";

/// Build the HTTP client shared by both form gateways
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("djn-site/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// Gateway posting one form's values to its Formspree endpoint
#[derive(Debug, Clone)]
pub struct FormspreeGateway {
    client: reqwest::Client,
    url: String,
}

impl FormspreeGateway {
    pub fn new(client: reqwest::Client, endpoint_base: &str, form_id: &str) -> Self {
        let url = format!("{}/f/{}", endpoint_base.trim_end_matches('/'), form_id);
        Self { client, url }
    }

    /// The endpoint this gateway posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubmissionGateway for FormspreeGateway {
    async fn submit(&self, values: &FormValues) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .form(&values.as_pairs())
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::debug!(url = %self.url, %status, "Form endpoint rejected submission");
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CONTACT_FORM;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> reqwest::Client {
        build_http_client(Duration::from_secs(5)).unwrap()
    }

    fn contact_values() -> FormValues {
        let mut values = FormValues::empty(CONTACT_FORM.fields);
        values.set("name", "John Doe".to_string());
        values.set("email", "john@example.com".to_string());
        values.set("subject", "quote".to_string());
        values.set("message", "Test message".to_string());
        values
    }

    #[test]
    fn test_url_joins_base_and_form_id() {
        let gateway = FormspreeGateway::new(client(), "https://formspree.io/", "abc123");
        assert_eq!(gateway.url(), "https://formspree.io/f/abc123");
    }

    #[tokio::test]
    async fn test_submit_posts_form_encoded_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/f/contact-id"))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("name=John+Doe"))
            .and(body_string_contains("email=john%40example.com"))
            .and(body_string_contains("subject=quote"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = FormspreeGateway::new(client(), &server.uri(), "contact-id");
        let result = gateway.submit(&contact_values()).await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_submit_sends_empty_optional_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("phone=&"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = FormspreeGateway::new(client(), &server.uri(), "contact-id");
        assert!(gateway.submit(&contact_values()).await.is_ok());
    }

    #[tokio::test]
    async fn test_server_error_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = FormspreeGateway::new(client(), &server.uri(), "contact-id");
        let result = gateway.submit(&contact_values()).await;
        assert_eq!(result, Err(SubmissionError::Rejected { status: 500 }));
    }

    #[tokio::test]
    async fn test_validation_failure_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"errors":[]}"#))
            .mount(&server)
            .await;

        let gateway = FormspreeGateway::new(client(), &server.uri(), "booking-id");
        let err = gateway.submit(&contact_values()).await.unwrap_err();
        assert_eq!(err.to_string(), "Submission rejected with status 422");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 1 is reserved and refuses connections
        let gateway = FormspreeGateway::new(client(), "http://127.0.0.1:1", "contact-id");
        let result = gateway.submit(&contact_values()).await;
        assert!(matches!(result, Err(SubmissionError::Network(_))));
    }
}
