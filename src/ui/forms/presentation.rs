//! Chooses what a mounted form shows for its current submission state

use crate::state::{
    FieldSpec, FieldViolation, FormSchema, FormValues, SubmissionState, SuccessCopy, ERROR_BANNER,
};

/// Submit label while a request is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// One input as it should be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub spec: &'static FieldSpec,
    /// Display text (select fields show the option label)
    pub value: String,
    pub error: Option<&'static str>,
}

/// The single view a form renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView {
    /// Inputs plus submit button; covers Idle, Submitting and Error
    Editable {
        banner: Option<&'static str>,
        controls_enabled: bool,
        submit_label: &'static str,
        fields: Vec<FieldView>,
    },
    /// Shown in place of the inputs after an accepted submission
    Confirmation(SuccessCopy),
}

impl FormView {
    /// Map controller state, values and current violations to a view
    pub fn select(
        state: SubmissionState,
        values: &FormValues,
        violations: &[FieldViolation],
        schema: &'static FormSchema,
    ) -> Self {
        if state == SubmissionState::Success {
            return FormView::Confirmation(schema.success);
        }

        let fields = schema
            .fields
            .iter()
            .map(|spec| FieldView {
                spec,
                value: spec.display_value(values.get(spec.name)),
                error: violations
                    .iter()
                    .find(|v| v.field == spec.name)
                    .map(|v| v.violation.message()),
            })
            .collect();

        let submitting = state == SubmissionState::Submitting;
        FormView::Editable {
            banner: (state == SubmissionState::Error).then_some(ERROR_BANNER),
            controls_enabled: !submitting,
            submit_label: if submitting {
                SENDING_LABEL
            } else {
                schema.submit_label
            },
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Violation, BOOKING_FORM, CONTACT_FORM};
    use pretty_assertions::assert_eq;

    fn contact_values() -> FormValues {
        let mut values = FormValues::empty(CONTACT_FORM.fields);
        values.set("name", "John Doe".to_string());
        values.set("subject", "emergency".to_string());
        values
    }

    fn editable(view: FormView) -> (Option<&'static str>, bool, &'static str, Vec<FieldView>) {
        match view {
            FormView::Editable {
                banner,
                controls_enabled,
                submit_label,
                fields,
            } => (banner, controls_enabled, submit_label, fields),
            FormView::Confirmation(_) => panic!("expected editable view"),
        }
    }

    #[test]
    fn test_idle_is_editable_without_banner() {
        let view = FormView::select(SubmissionState::Idle, &contact_values(), &[], &CONTACT_FORM);
        let (banner, enabled, label, fields) = editable(view);
        assert_eq!(banner, None);
        assert!(enabled);
        assert_eq!(label, "Send Message");
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0].value, "John Doe");
    }

    #[test]
    fn test_select_fields_show_option_label() {
        let view = FormView::select(SubmissionState::Idle, &contact_values(), &[], &CONTACT_FORM);
        let (_, _, _, fields) = editable(view);
        assert_eq!(fields[3].value, "Emergency Service");
    }

    #[test]
    fn test_error_shows_banner_and_keeps_values() {
        let view = FormView::select(SubmissionState::Error, &contact_values(), &[], &CONTACT_FORM);
        let (banner, enabled, _, fields) = editable(view);
        assert_eq!(
            banner,
            Some("Something went wrong. Please try again or call us directly.")
        );
        assert!(enabled);
        assert_eq!(fields[0].value, "John Doe");
    }

    #[test]
    fn test_submitting_disables_controls() {
        let view = FormView::select(
            SubmissionState::Submitting,
            &contact_values(),
            &[],
            &CONTACT_FORM,
        );
        let (banner, enabled, label, _) = editable(view);
        assert_eq!(banner, None);
        assert!(!enabled);
        assert_eq!(label, SENDING_LABEL);
    }

    #[test]
    fn test_success_replaces_form_with_confirmation() {
        let values = FormValues::empty(BOOKING_FORM.fields);
        let view = FormView::select(SubmissionState::Success, &values, &[], &BOOKING_FORM);
        assert_eq!(view, FormView::Confirmation(BOOKING_FORM.success));
    }

    #[test]
    fn test_violations_attach_to_their_field() {
        let violations = [FieldViolation {
            field: "email",
            violation: Violation::Missing,
        }];
        let view = FormView::select(
            SubmissionState::Idle,
            &contact_values(),
            &violations,
            &CONTACT_FORM,
        );
        let (_, _, _, fields) = editable(view);
        assert_eq!(fields[1].error, Some("Please fill out this field."));
        assert!(fields
            .iter()
            .filter(|f| f.spec.name != "email")
            .all(|f| f.error.is_none()));
    }
}
