//! Submission errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::products::records::ValidationErrors;

/// Ways a create-product submission can fail.
///
/// Every variant is terminal for the attempt and surfaced to the user; the
/// user may resubmit, which starts a fresh cycle.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The server rejected the data with field-level messages. Recoverable
    /// by editing and resubmitting.
    #[error("submitted data failed validation")]
    Validation(ValidationErrors),

    /// Non-2xx without a recognizable error body, or a 2xx body that does
    /// not decode as a product record. Not further diagnosable client-side.
    #[error("unexpected response from server (status {0})")]
    UnexpectedResponse(StatusCode),

    /// The request could not complete at the transport level.
    #[error("request could not be completed")]
    Transport(#[source] reqwest::Error),
}
