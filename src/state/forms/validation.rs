//! Input constraints checked before a form is handed to the controller
//!
//! These mirror what a browser enforces for `required`, `type=email`,
//! `type=tel`, `type=date min=today` and `<select>` inputs. The controller
//! never validates; the UI refuses to submit while violations exist.

use super::field::{FieldKind, FieldSpec, FormValues};
use super::schema::FormSchema;
use chrono::NaiveDate;

/// Why a single field is not acceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Missing,
    InvalidEmail,
    InvalidPhone,
    InvalidDate,
    DateInPast,
    UnknownOption,
}

impl Violation {
    pub fn message(self) -> &'static str {
        match self {
            Violation::Missing => "Please fill out this field.",
            Violation::InvalidEmail => "Please enter a valid email address.",
            Violation::InvalidPhone => "Please enter a valid phone number.",
            Violation::InvalidDate => "Please enter a date as YYYY-MM-DD.",
            Violation::DateInPast => "Please choose today or a later date.",
            Violation::UnknownOption => "Please select an item in the list.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub violation: Violation,
}

/// Check every field of `schema` against `values`, in field order
pub fn validate(schema: &FormSchema, values: &FormValues, today: NaiveDate) -> Vec<FieldViolation> {
    schema
        .fields
        .iter()
        .filter_map(|spec| {
            check_field(spec, values.get(spec.name), today).map(|violation| FieldViolation {
                field: spec.name,
                violation,
            })
        })
        .collect()
}

/// Constraint check for one field value
pub fn check_field(spec: &FieldSpec, value: &str, today: NaiveDate) -> Option<Violation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return spec.required.then_some(Violation::Missing);
    }

    match spec.kind {
        FieldKind::Text | FieldKind::Multiline => None,
        FieldKind::Email => (!is_valid_email(trimmed)).then_some(Violation::InvalidEmail),
        FieldKind::Tel => (!is_valid_phone(trimmed)).then_some(Violation::InvalidPhone),
        FieldKind::Date => match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) if date < today => Some(Violation::DateInPast),
            Ok(_) => None,
            Err(_) => Some(Violation::InvalidDate),
        },
        FieldKind::Select(options) => {
            (!options.iter().any(|o| o.value == value)).then_some(Violation::UnknownOption)
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.split('.');
    let has_dot = domain.contains('.');
    has_dot && labels.all(|l| !l.is_empty())
}

fn is_valid_phone(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    allowed && digits >= 7
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::schema::{BOOKING_FORM, CONTACT_FORM};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn filled_contact() -> FormValues {
        let mut values = FormValues::empty(CONTACT_FORM.fields);
        values.set("name", "John Doe".into());
        values.set("email", "john@example.com".into());
        values.set("subject", "quote".into());
        values.set("message", "Test message".into());
        values
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_plain_address() {
            assert!(is_valid_email("john@example.com"));
            assert!(is_valid_email("a.b+c@mail.example.co"));
        }

        #[test]
        fn test_rejects_malformed() {
            assert!(!is_valid_email("john"));
            assert!(!is_valid_email("@example.com"));
            assert!(!is_valid_email("john@localhost"));
            assert!(!is_valid_email("john@example..com"));
            assert!(!is_valid_email("john@@example.com"));
            assert!(!is_valid_email("jo hn@example.com"));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_accepts_common_formats() {
            assert!(is_valid_phone("(555) 123-4567"));
            assert!(is_valid_phone("555-123-4567"));
            assert!(is_valid_phone("+1 555.123.4567"));
        }

        #[test]
        fn test_rejects_letters_and_short_numbers() {
            assert!(!is_valid_phone("555-CALL-NOW"));
            assert!(!is_valid_phone("12345"));
        }
    }

    mod contact {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_filled_form_is_valid() {
            assert!(validate(&CONTACT_FORM, &filled_contact(), today()).is_empty());
        }

        #[test]
        fn test_phone_is_optional() {
            let values = filled_contact();
            assert_eq!(values.get("phone"), "");
            assert!(validate(&CONTACT_FORM, &values, today()).is_empty());
        }

        #[test]
        fn test_empty_form_reports_required_fields_in_order() {
            let values = FormValues::empty(CONTACT_FORM.fields);
            let fields: Vec<&str> = validate(&CONTACT_FORM, &values, today())
                .iter()
                .map(|v| v.field)
                .collect();
            assert_eq!(fields, vec!["name", "email", "subject", "message"]);
        }

        #[test]
        fn test_whitespace_only_counts_as_missing() {
            let mut values = filled_contact();
            values.set("name", "   ".into());
            assert_eq!(
                validate(&CONTACT_FORM, &values, today()),
                vec![FieldViolation {
                    field: "name",
                    violation: Violation::Missing
                }]
            );
        }

        #[test]
        fn test_unknown_subject_rejected() {
            let mut values = filled_contact();
            values.set("subject", "spam".into());
            assert_eq!(
                validate(&CONTACT_FORM, &values, today())[0].violation,
                Violation::UnknownOption
            );
        }
    }

    mod booking_date {
        use super::*;
        use pretty_assertions::assert_eq;

        fn date_spec() -> &'static FieldSpec {
            BOOKING_FORM.fields.iter().find(|f| f.name == "date").unwrap()
        }

        #[test]
        fn test_today_is_allowed() {
            assert_eq!(check_field(date_spec(), "2026-10-16", today()), None);
        }

        #[test]
        fn test_future_is_allowed() {
            assert_eq!(check_field(date_spec(), "2026-10-17", today()), None);
        }

        #[test]
        fn test_past_is_rejected() {
            assert_eq!(
                check_field(date_spec(), "2026-10-15", today()),
                Some(Violation::DateInPast)
            );
        }

        #[test]
        fn test_garbage_is_rejected() {
            assert_eq!(
                check_field(date_spec(), "next tuesday", today()),
                Some(Violation::InvalidDate)
            );
        }
    }

    #[test]
    fn test_messages_are_distinct() {
        let all = [
            Violation::Missing,
            Violation::InvalidEmail,
            Violation::InvalidPhone,
            Violation::InvalidDate,
            Violation::DateInPast,
            Violation::UnknownOption,
        ];
        let mut messages: Vec<&str> = all.iter().map(|v| v.message()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }
}
