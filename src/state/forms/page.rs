//! Editing state of a mounted form page: focus, inline violations, input

use super::controller::{FormController, SubmissionState};
use super::field::{FieldKind, FieldSpec};
use super::schema::FormSchema;
use super::validation::{validate, FieldViolation};
use crate::gateway::SubmissionGateway;
use chrono::NaiveDate;
use std::sync::Arc;

/// A form as mounted on its page.
///
/// Focus index `0..field_count` addresses a field; `field_count` is the
/// submit button row.
#[derive(Debug)]
pub struct FormPage {
    pub controller: FormController,
    pub active_field: usize,
    pub violations: Vec<FieldViolation>,
}

impl FormPage {
    pub fn mount(schema: &'static FormSchema, gateway: Arc<dyn SubmissionGateway>) -> Self {
        tracing::debug!(form = schema.kind.label(), "Mounting form");
        Self {
            controller: FormController::new(schema, gateway),
            active_field: 0,
            violations: Vec::new(),
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.controller.schema()
    }

    pub fn state(&self) -> SubmissionState {
        self.controller.state()
    }

    /// Number of focus stops (fields plus the submit button)
    pub fn focus_count(&self) -> usize {
        self.schema().field_count() + 1
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field == self.schema().field_count()
    }

    pub fn active_spec(&self) -> Option<&'static FieldSpec> {
        self.schema().fields.get(self.active_field)
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % self.focus_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field == 0 {
            self.active_field = self.focus_count() - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Type a character into the focused field. Select fields ignore text
    /// except space, which advances the selection.
    pub fn input_char(&mut self, c: char) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if matches!(spec.kind, FieldKind::Select(_)) {
            if c == ' ' {
                self.cycle_option(true);
            }
            return;
        }
        let mut value = self.controller.value(spec.name).to_string();
        value.push(c);
        self.write(spec, value);
    }

    pub fn backspace(&mut self) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        if matches!(spec.kind, FieldKind::Select(_)) {
            self.write(spec, String::new());
            return;
        }
        let mut value = self.controller.value(spec.name).to_string();
        value.pop();
        self.write(spec, value);
    }

    /// Enter inside a field: newline for multiline fields, otherwise move on
    pub fn newline(&mut self) {
        match self.active_spec() {
            Some(spec) if spec.is_multiline() => {
                let mut value = self.controller.value(spec.name).to_string();
                value.push('\n');
                self.write(spec, value);
            }
            _ => self.next_field(),
        }
    }

    /// Step the focused select field through its options
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(spec) = self.active_spec() else {
            return;
        };
        let current = self.controller.value(spec.name);
        let next = if forward {
            spec.next_option(current)
        } else {
            spec.prev_option(current)
        };
        if let Some(next) = next {
            self.write(spec, next.to_string());
        }
    }

    /// Check constraints and, if they hold, start a submission.
    ///
    /// Returns true if the controller accepted the submit.
    pub fn try_submit(&mut self, today: NaiveDate) -> bool {
        if !self.state().is_editable() {
            return false;
        }
        self.violations = validate(self.schema(), self.controller.values(), today);
        if let Some(first) = self.violations.first() {
            tracing::debug!(
                form = self.schema().kind.label(),
                count = self.violations.len(),
                "Submission blocked by input constraints"
            );
            if let Some(idx) = self.schema().fields.iter().position(|f| f.name == first.field) {
                self.active_field = idx;
            }
            return false;
        }
        self.controller.submit()
    }

    /// Apply finished submissions and timers; a reset returns focus to the top
    pub fn tick(&mut self) -> bool {
        let changed = self.controller.poll();
        if changed && self.state() == SubmissionState::Idle {
            self.active_field = 0;
        }
        changed
    }

    fn write(&mut self, spec: &FieldSpec, value: String) {
        if !self.state().is_editable() {
            return;
        }
        self.controller.set_field(spec.name, value);
        self.violations.retain(|v| v.field != spec.name);
    }
}
