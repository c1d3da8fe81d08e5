//! Submission gateway: relays completed forms to the form-processing service

mod formspree;
mod traits;

pub use formspree::{build_http_client, FormspreeGateway, DEFAULT_ENDPOINT_BASE};
pub use traits::{SubmissionError, SubmissionGateway};

#[cfg(test)]
pub use traits::MockSubmissionGateway;
