//! Product creation API client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{StatusCode, Url};

use crate::gateway::Gateway;
use crate::products::errors::SubmissionError;
use crate::products::records::{ProductRecord, ValidationErrors};

/// Server endpoint for creating products.
#[automock]
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// POST the form fields to the given action URL.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Validation`] when the server rejects the
    /// data with field messages, [`SubmissionError::UnexpectedResponse`] for
    /// any other non-2xx or malformed body, and
    /// [`SubmissionError::Transport`] when the request does not complete.
    async fn create_product(
        &self,
        action: Url,
        fields: Vec<(String, String)>,
    ) -> Result<ProductRecord, SubmissionError>;
}

/// [`ProductApi`] over the page's HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    gateway: Gateway,
}

impl HttpProductApi {
    #[must_use]
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn create_product(
        &self,
        action: Url,
        fields: Vec<(String, String)>,
    ) -> Result<ProductRecord, SubmissionError> {
        let response = self
            .gateway
            .post_form(&action, &fields)
            .await
            .map_err(SubmissionError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(SubmissionError::Transport)?;

        decode_create_response(status, &body)
    }
}

/// Map a response to exactly one of: record, validation errors, or the
/// degenerate unexpected-shape outcome.
fn decode_create_response(
    status: StatusCode,
    body: &str,
) -> Result<ProductRecord, SubmissionError> {
    if status.is_success() {
        return serde_json::from_str(body)
            .map_err(|_| SubmissionError::UnexpectedResponse(status));
    }

    match serde_json::from_str::<ValidationErrors>(body) {
        Ok(errors) if !errors.is_empty() => Err(SubmissionError::Validation(errors)),
        _ => Err(SubmissionError::UnexpectedResponse(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_decodes_to_a_record() {
        let body = r#"{"id": 42, "name": "Widget", "price": 9.99, "stock": 3, "is_active": true}"#;

        let record = decode_create_response(StatusCode::CREATED, body)
            .expect("well-formed 2xx should decode");

        assert_eq!(record.id, 42);
    }

    #[test]
    fn malformed_success_body_is_unexpected() {
        let result = decode_create_response(StatusCode::OK, "not json");

        assert!(
            matches!(result, Err(SubmissionError::UnexpectedResponse(status)) if status == StatusCode::OK),
            "expected UnexpectedResponse, got {result:?}"
        );
    }

    #[test]
    fn structured_failure_body_decodes_to_validation_errors() {
        let body = r#"{"price": ["must be positive"], "name": ["required"]}"#;

        let result = decode_create_response(StatusCode::BAD_REQUEST, body);

        let Err(SubmissionError::Validation(errors)) = result else {
            panic!("expected Validation, got {result:?}");
        };

        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();

        assert_eq!(fields, ["name", "price"]);
    }

    #[test]
    fn unstructured_failure_body_is_unexpected() {
        for body in ["", "<html>Server Error</html>", r#""detail""#] {
            let result = decode_create_response(StatusCode::INTERNAL_SERVER_ERROR, body);

            assert!(
                matches!(result, Err(SubmissionError::UnexpectedResponse(_))),
                "body {body:?} should be unexpected, got {result:?}"
            );
        }
    }

    #[test]
    fn empty_error_mapping_is_unexpected() {
        let result = decode_create_response(StatusCode::BAD_REQUEST, "{}");

        assert!(
            matches!(result, Err(SubmissionError::UnexpectedResponse(_))),
            "empty mapping should be degenerate, got {result:?}"
        );
    }
}
