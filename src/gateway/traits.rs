//! Trait abstraction for the submission gateway to enable mocking in tests

use crate::state::FormValues;
use async_trait::async_trait;
use thiserror::Error;

/// Why a submission did not go through.
///
/// The form controller treats both variants the same; the split only
/// matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request could not be sent or no response was received
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status
    #[error("Submission rejected with status {status}")]
    Rejected { status: u16 },
}

/// Two-outcome contract for delivering a form.
///
/// Implementations must not assume they are called once per form, in order,
/// or with retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Deliver the submitted field values
    async fn submit(&self, values: &FormValues) -> Result<(), SubmissionError>;
}
