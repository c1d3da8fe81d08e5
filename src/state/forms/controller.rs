//! Submission lifecycle for a lead-capture form
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Success --reset timer--> Idle
//!                       |
//!                       +--failure--> Error --submit--> Submitting
//! ```
//!
//! The gateway call and the reset timer run as spawned tokio tasks and report
//! back through a channel, so the UI loop never blocks on the network. Both
//! tasks are aborted when the controller is dropped.

use super::field::FormValues;
use super::schema::FormSchema;
use crate::gateway::{SubmissionError, SubmissionGateway};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use uuid::Uuid;

/// Where a form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    /// Field edits and submissions are accepted
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Idle | Self::Error)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug)]
enum FormEvent {
    Completed {
        ticket: u64,
        outcome: Result<(), SubmissionError>,
    },
    ResetDue {
        ticket: u64,
    },
}

/// Handle to a spawned task, aborted on drop
#[derive(Debug)]
struct ScheduledTask {
    ticket: u64,
    handle: AbortHandle,
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Owns one form's values, its submission state and its reset timer
pub struct FormController {
    schema: &'static FormSchema,
    values: FormValues,
    state: SubmissionState,
    gateway: Arc<dyn SubmissionGateway>,
    events_tx: mpsc::UnboundedSender<FormEvent>,
    events_rx: mpsc::UnboundedReceiver<FormEvent>,
    next_ticket: u64,
    in_flight: Option<ScheduledTask>,
    pending_reset: Option<ScheduledTask>,
}

impl FormController {
    pub fn new(schema: &'static FormSchema, gateway: Arc<dyn SubmissionGateway>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            schema,
            values: FormValues::empty(schema.fields),
            state: SubmissionState::Idle,
            gateway,
            events_tx,
            events_rx,
            next_ticket: 0,
            in_flight: None,
            pending_reset: None,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name)
    }

    /// Update one field. Ignored while submitting or showing the confirmation.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if !self.state.is_editable() {
            tracing::debug!(
                form = self.schema.kind.label(),
                field = name,
                state = self.state.label(),
                "Ignoring edit outside editable state"
            );
            return;
        }
        if self.schema.field(name).is_none() {
            tracing::debug!(form = self.schema.kind.label(), field = name, "Unknown field");
            return;
        }
        self.values.set(name, value.into());
    }

    /// Start a submission with the current values.
    ///
    /// Returns false (and does nothing) unless the form is `Idle` or `Error`.
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> bool {
        if !self.state.is_editable() {
            tracing::debug!(
                form = self.schema.kind.label(),
                state = self.state.label(),
                "Ignoring re-entrant submit"
            );
            return false;
        }

        let ticket = self.take_ticket();
        let submission_id = Uuid::new_v4();
        let form = self.schema.kind.label();
        let values = self.values.clone();
        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();

        tracing::info!(form, %submission_id, fields = values.len(), "Submitting form");
        let handle = tokio::spawn(async move {
            let outcome = gateway.submit(&values).await;
            match &outcome {
                Ok(()) => tracing::info!(form, %submission_id, "Submission accepted"),
                Err(err) => tracing::warn!(form, %submission_id, error = %err, "Submission failed"),
            }
            let _ = tx.send(FormEvent::Completed { ticket, outcome });
        })
        .abort_handle();

        self.state = SubmissionState::Submitting;
        self.in_flight = Some(ScheduledTask { ticket, handle });
        true
    }

    /// Abort the scheduled return to `Idle`, if any
    pub fn cancel_pending_reset(&mut self) {
        if self.pending_reset.take().is_some() {
            tracing::debug!(form = self.schema.kind.label(), "Cancelled pending reset");
        }
    }

    /// Whether a submission or reset is still outstanding
    pub fn has_pending_work(&self) -> bool {
        self.in_flight.is_some() || self.pending_reset.is_some()
    }

    /// Apply every event that has already arrived. Returns true if state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Wait for the next outstanding submission result or reset and apply it.
    ///
    /// Returns false immediately when nothing is outstanding.
    #[cfg(test)]
    pub async fn next_update(&mut self) -> bool {
        while self.has_pending_work() {
            let Some(event) = self.events_rx.recv().await else {
                return false;
            };
            if self.apply(event) {
                return true;
            }
        }
        false
    }

    fn apply(&mut self, event: FormEvent) -> bool {
        match event {
            FormEvent::Completed { ticket, outcome } => {
                if self.in_flight.as_ref().map(|t| t.ticket) != Some(ticket) {
                    return false;
                }
                self.in_flight = None;
                match outcome {
                    Ok(()) => {
                        self.state = SubmissionState::Success;
                        self.values.clear();
                        self.schedule_reset();
                    }
                    Err(_) => {
                        self.state = SubmissionState::Error;
                    }
                }
                true
            }
            FormEvent::ResetDue { ticket } => {
                if self.pending_reset.as_ref().map(|t| t.ticket) != Some(ticket) {
                    return false;
                }
                self.pending_reset = None;
                if self.state != SubmissionState::Success {
                    return false;
                }
                self.state = SubmissionState::Idle;
                tracing::debug!(form = self.schema.kind.label(), "Form reset");
                true
            }
        }
    }

    fn schedule_reset(&mut self) {
        let ticket = self.take_ticket();
        let deadline = Instant::now() + self.schema.reset_delay;
        let tx = self.events_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(FormEvent::ResetDue { ticket });
        })
        .abort_handle();
        self.pending_reset = Some(ScheduledTask { ticket, handle });
    }

    fn take_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }
}

impl Drop for FormController {
    fn drop(&mut self) {
        self.cancel_pending_reset();
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("form", &self.schema.kind)
            .field("state", &self.state)
            .field("values", &self.values)
            .finish()
    }
}
