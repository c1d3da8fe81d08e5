//! Form domain layer
//!
//! Field schemas for the two lead-capture forms, the submission state
//! machine, and the page-level editing state around it.

mod controller;
mod field;
mod page;
mod schema;
mod validation;

pub use controller::SubmissionState;
pub use field::{FieldKind, FieldSpec, FormValues};
pub use page::FormPage;
pub use schema::{FormKind, FormSchema, SuccessCopy, ERROR_BANNER};
pub use validation::FieldViolation;

#[cfg(test)]
pub use schema::{BOOKING_FORM, CONTACT_FORM};
#[cfg(test)]
pub use validation::Violation;
