//! The two lead-capture form definitions

use super::field::{FieldKind, FieldSpec, SelectOption};
use std::time::Duration;

/// Which lead-capture form a schema describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Contact,
    Booking,
}

impl FormKind {
    pub fn schema(self) -> &'static FormSchema {
        match self {
            FormKind::Contact => &CONTACT_FORM,
            FormKind::Booking => &BOOKING_FORM,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Booking => "booking",
        }
    }
}

/// Copy shown once a submission has been accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessCopy {
    pub heading: &'static str,
    pub body: &'static [&'static str],
}

/// Field layout plus the per-form settings of the state machine
#[derive(Debug)]
pub struct FormSchema {
    pub kind: FormKind,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    pub reset_delay: Duration,
    pub submit_label: &'static str,
    pub success: SuccessCopy,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Banner shown above the form after a failed submission
pub const ERROR_BANNER: &str = "Something went wrong. Please try again or call us directly.";

const CONTACT_SUBJECTS: &[SelectOption] = &[
    SelectOption {
        value: "quote",
        label: "Request a Quote",
    },
    SelectOption {
        value: "general",
        label: "General Inquiry",
    },
    SelectOption {
        value: "service",
        label: "Service Question",
    },
    SelectOption {
        value: "emergency",
        label: "Emergency Service",
    },
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text).required(),
    FieldSpec::new("email", "Email", FieldKind::Email).required(),
    FieldSpec::new("phone", "Phone", FieldKind::Tel),
    FieldSpec::new("subject", "Subject", FieldKind::Select(CONTACT_SUBJECTS)).required(),
    FieldSpec::new("message", "Message", FieldKind::Multiline).required(),
];

pub static CONTACT_FORM: FormSchema = FormSchema {
    kind: FormKind::Contact,
    title: "Send Us a Message",
    fields: CONTACT_FIELDS,
    reset_delay: Duration::from_millis(3000),
    submit_label: "Send Message",
    success: SuccessCopy {
        heading: "Thank you for your message!",
        body: &["We'll get back to you as soon as possible."],
    },
};

const BOOKING_SERVICES: &[SelectOption] = &[
    SelectOption::same("MIG Welding"),
    SelectOption::same("TIG Welding"),
    SelectOption::same("Stick Welding"),
    SelectOption::same("Custom Fabrication"),
    SelectOption::same("Mobile Welding"),
    SelectOption::same("Structural Welding"),
    SelectOption::same("Repair Services"),
    SelectOption::same("Other"),
];

const BOOKING_PROJECT_TYPES: &[SelectOption] = &[
    SelectOption::same("Residential"),
    SelectOption::same("Commercial"),
    SelectOption::same("Industrial"),
    SelectOption::same("Automotive"),
    SelectOption::same("Agricultural"),
    SelectOption::same("Emergency Repair"),
];

const BOOKING_TIME_SLOTS: &[SelectOption] = &[
    SelectOption::same("8:00 AM - 10:00 AM"),
    SelectOption::same("10:00 AM - 12:00 PM"),
    SelectOption::same("12:00 PM - 2:00 PM"),
    SelectOption::same("2:00 PM - 4:00 PM"),
    SelectOption::same("4:00 PM - 6:00 PM"),
];

const BOOKING_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Full Name", FieldKind::Text)
        .required()
        .placeholder("John Doe"),
    FieldSpec::new("email", "Email Address", FieldKind::Email)
        .required()
        .placeholder("john@example.com"),
    FieldSpec::new("phone", "Phone Number", FieldKind::Tel)
        .required()
        .placeholder("(555) 123-4567"),
    FieldSpec::new(
        "serviceType",
        "Service Type",
        FieldKind::Select(BOOKING_SERVICES),
    )
    .required(),
    FieldSpec::new(
        "projectType",
        "Project Type",
        FieldKind::Select(BOOKING_PROJECT_TYPES),
    )
    .required(),
    FieldSpec::new("location", "Project Location", FieldKind::Text)
        .required()
        .placeholder("City, State or full address"),
    FieldSpec::new("date", "Preferred Date", FieldKind::Date)
        .required()
        .placeholder("YYYY-MM-DD"),
    FieldSpec::new(
        "time",
        "Preferred Time Slot",
        FieldKind::Select(BOOKING_TIME_SLOTS),
    )
    .required(),
    FieldSpec::new("description", "Project Description", FieldKind::Multiline)
        .required()
        .placeholder("Please describe your project, including materials, dimensions, and any special requirements..."),
];

pub static BOOKING_FORM: FormSchema = FormSchema {
    kind: FormKind::Booking,
    title: "Schedule Your Service",
    fields: BOOKING_FIELDS,
    reset_delay: Duration::from_millis(5000),
    submit_label: "Submit Booking Request",
    success: SuccessCopy {
        heading: "Booking Request Received!",
        body: &[
            "Thank you for choosing DJN Services LLC.",
            "We've received your booking request and will contact you within 24 hours to confirm your appointment and discuss your project details.",
            "What's next? Our team will review your request and reach out to confirm the date, time, and provide a detailed quote for your project.",
        ],
    },
};
