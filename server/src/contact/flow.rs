use super::draft::{ContactDraft, ContactField};
use super::transport::{MessageTransport, TransportError};
use super::validation::{ContactSchema, ValidationErrors};
use crate::validation::Validator;
use std::time::{Duration, Instant};
use thiserror::Error;
use uuid::Uuid;

/// How long the `Sent` state is shown before returning to `Idle`.
pub const DEFAULT_SENT_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Sent { at: Instant },
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Transport(TransportError),
    #[error("A submission is already in flight")]
    Busy,
}

/// A validated snapshot of the draft handed to the transport.
///
/// The id ties the asynchronous result back to the attempt that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    id: Uuid,
    draft: ContactDraft,
}

impl SubmissionTicket {
    pub fn new(draft: ContactDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            draft,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }
}

/// What a completed delivery changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Failed(TransportError),
}

/// Submission state machine: idle → submitting → sent | failed → idle.
///
/// The flow never talks to the network itself. [`ContactFlow::begin_submit`]
/// hands out a ticket, the caller runs the transport exactly once and feeds the
/// result back through [`ContactFlow::complete`]. [`ContactFlow::submit`] does
/// both in one call for callers that can await.
#[derive(Debug, Clone)]
pub struct ContactFlow {
    draft: ContactDraft,
    errors: ValidationErrors,
    state: SubmissionState,
    schema: ContactSchema,
    sent_display: Duration,
    in_flight: Option<Uuid>,
}

impl Default for ContactFlow {
    fn default() -> Self {
        Self::new(DEFAULT_SENT_DISPLAY)
    }
}

impl ContactFlow {
    pub fn new(sent_display: Duration) -> Self {
        Self {
            draft: ContactDraft::default(),
            errors: ValidationErrors::new(),
            state: SubmissionState::Idle,
            schema: ContactSchema::default(),
            sent_display,
            in_flight: None,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Inputs are disabled for the whole time a request is in flight.
    pub fn is_input_enabled(&self) -> bool {
        !self.state.is_submitting()
    }

    /// Replace a field's value. Ignored while submitting.
    ///
    /// An edit clears that field's error and returns a finished submission
    /// (`sent` or `failed`) to `idle`.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if !self.is_input_enabled() {
            return false;
        }

        self.draft.set(field, value);
        self.errors.remove(field);
        if matches!(
            self.state,
            SubmissionState::Failed | SubmissionState::Sent { .. }
        ) {
            self.state = SubmissionState::Idle;
        }
        true
    }

    /// Validate the draft and, when it passes, move to `submitting`.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SubmitError> {
        if self.state.is_submitting() {
            log::debug!("Ignoring submit while a request is in flight");
            return Err(SubmitError::Busy);
        }

        if let Err(errors) = self.schema.validate(&self.draft) {
            log::debug!("Contact draft rejected: {errors}");
            self.errors = errors.clone();
            return Err(SubmitError::Validation(errors));
        }

        self.errors.clear();
        let ticket = SubmissionTicket::new(self.draft.clone());
        self.in_flight = Some(ticket.id());
        self.state = SubmissionState::Submitting;
        log::info!("Contact submission {} started", ticket.id());
        Ok(ticket)
    }

    /// Apply the transport result for the ticket currently in flight.
    ///
    /// Results for unknown tickets are dropped and `None` is returned.
    pub fn complete(
        &mut self,
        ticket_id: Uuid,
        result: Result<(), TransportError>,
        now: Instant,
    ) -> Option<SubmissionOutcome> {
        if self.in_flight != Some(ticket_id) {
            log::warn!("Dropping result for stale contact submission {ticket_id}");
            return None;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                self.draft.clear();
                self.state = SubmissionState::Sent { at: now };
                Some(SubmissionOutcome::Sent)
            }
            Err(error) => {
                log::error!("Contact submission {ticket_id} failed: {error}");
                self.state = SubmissionState::Failed;
                Some(SubmissionOutcome::Failed(error))
            }
        }
    }

    /// Expire the `sent` state. Returns true when the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let SubmissionState::Sent { at } = self.state {
            if now.saturating_duration_since(at) >= self.sent_display {
                self.state = SubmissionState::Idle;
                return true;
            }
        }
        false
    }

    /// Validate, deliver once and apply the result.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<(), SubmitError>
    where
        T: MessageTransport + ?Sized,
    {
        let ticket = self.begin_submit()?;
        let result = transport.deliver(&ticket).await;
        match self.complete(ticket.id(), result, Instant::now()) {
            Some(SubmissionOutcome::Failed(error)) => Err(SubmitError::Transport(error)),
            _ => Ok(()),
        }
    }
}
