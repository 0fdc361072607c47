//! Contact form delivery.
//!
//! The flow is split the same way the UI consumes it:
//!
//! - [`draft`] - the three user-editable fields
//! - [`validation`] - the synchronous schema (name, email, message)
//! - [`transport`] - the single outbound HTTP call to the email service
//! - [`flow`] - the submission state machine tying the three together

pub mod draft;
pub mod flow;
pub mod transport;
pub mod validation;

pub use draft::{ContactDraft, ContactField};
pub use flow::{ContactFlow, SubmissionOutcome, SubmissionState, SubmissionTicket, SubmitError};
pub use transport::{
    EmailJsTransport, MessageTransport, OutboundMessage, TransportConfig, TransportError,
};
pub use validation::{ContactSchema, FieldError, ValidationErrors};
