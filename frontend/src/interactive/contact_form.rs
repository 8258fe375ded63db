//! Contact form validation and request lifecycle.
//!
//! The form does no I/O itself: `begin_submit` hands back the payload to
//! POST, and the caller reports how the request went through `settle`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const MESSAGE_REQUIRED: &str = "Message is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Per-field messages; an empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name.clear(),
            ContactField::Email => self.email.clear(),
            ContactField::Message => self.message.clear(),
        }
    }
}

pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.name = NAME_REQUIRED.to_string();
    }

    if fields.email.trim().is_empty() {
        errors.email = EMAIL_REQUIRED.to_string();
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.email = EMAIL_INVALID.to_string();
    }

    if fields.message.trim().is_empty() {
        errors.message = MESSAGE_REQUIRED.to_string();
    }

    errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// What came back from the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOutcome {
    Delivered,
    /// The sink answered with a non-2xx status.
    Rejected(u16),
    /// The request never completed.
    Unreachable(String),
}

impl SinkOutcome {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            SinkOutcome::Delivered
        } else {
            SinkOutcome::Rejected(status)
        }
    }
}

/// User-facing notifications raised along the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sending,
    Sent,
    Failed,
    Errored,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Sending => "Sending message...",
            Notice::Sent => "Message sent!",
            Notice::Failed | Notice::Errored => "Error",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::Sending => "Please wait while we process your message.",
            Notice::Sent => "Thanks for reaching out. I'll get back to you soon!",
            Notice::Failed => "Failed to send message. Please try again later.",
            Notice::Errored => "Something went wrong. Please try again later.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failed | Notice::Errored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A previous submission is still waiting on the sink.
    InFlight,
    /// Validation failed; the errors are stored on the form.
    Invalid,
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejected::InFlight => write!(f, "a message is already being sent"),
            SubmitRejected::Invalid => write!(f, "the form has invalid fields"),
        }
    }
}

impl std::error::Error for SubmitRejected {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    lifecycle: Lifecycle,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            errors: FieldErrors::default(),
            lifecycle: Lifecycle::Idle,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_sending(&self) -> bool {
        self.lifecycle == Lifecycle::Sending
    }

    /// Stores a keystroke and clears that field's error, if any.
    pub fn update_field(&mut self, field: ContactField, value: String) {
        *self.fields.slot(field) = value;
        self.errors.clear(field);
    }

    pub fn begin_submit(&mut self) -> Result<ContactFields, SubmitRejected> {
        if self.is_sending() {
            return Err(SubmitRejected::InFlight);
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return Err(SubmitRejected::Invalid);
        }

        self.lifecycle = Lifecycle::Sending;
        Ok(self.fields.clone())
    }

    /// Records the sink's answer. Ignored unless a submission is in flight.
    pub fn settle(&mut self, outcome: SinkOutcome) -> Option<Notice> {
        if !self.is_sending() {
            return None;
        }

        let notice = match outcome {
            SinkOutcome::Delivered => {
                self.fields = ContactFields::default();
                self.lifecycle = Lifecycle::Succeeded;
                Notice::Sent
            }
            SinkOutcome::Rejected(_) => {
                self.lifecycle = Lifecycle::Failed;
                Notice::Failed
            }
            SinkOutcome::Unreachable(_) => {
                self.lifecycle = Lifecycle::Failed;
                Notice::Errored
            }
        };
        Some(notice)
    }

    /// Returns a settled form to Idle once its notice has been shown.
    pub fn acknowledge(&mut self) {
        if matches!(self.lifecycle, Lifecycle::Succeeded | Lifecycle::Failed) {
            self.lifecycle = Lifecycle::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(ContactField::Name, "Ada".into());
        form.update_field(ContactField::Email, "ada@example.com".into());
        form.update_field(ContactField::Message, "Hello there".into());
        form
    }

    #[test]
    fn missing_name() {
        let errors = validate(&fields("", "a@b.com", "hi"));
        assert_eq!(
            errors,
            FieldErrors {
                name: NAME_REQUIRED.into(),
                email: String::new(),
                message: String::new(),
            }
        );
    }

    #[test]
    fn invalid_email() {
        let errors = validate(&fields("A", "not-an-email", "hi"));
        assert_eq!(errors.email, EMAIL_INVALID);
        assert!(errors.name.is_empty());
        assert!(errors.message.is_empty());
    }

    #[test]
    fn valid_fields() {
        assert!(validate(&fields("A", "a@b.com", "hi")).is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let errors = validate(&fields("  ", "\t", "\n "));
        assert_eq!(errors.name, NAME_REQUIRED);
        assert_eq!(errors.email, EMAIL_REQUIRED);
        assert_eq!(errors.message, MESSAGE_REQUIRED);
    }

    #[test]
    fn email_needs_a_dot_after_the_at() {
        assert_eq!(validate(&fields("A", "a@b", "hi")).email, EMAIL_INVALID);
        assert!(validate(&fields("A", "first.last@mail.co.uk", "hi")).is_empty());
    }

    #[test]
    fn typing_clears_only_that_field_error() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Invalid));
        assert_eq!(form.errors().name, NAME_REQUIRED);

        form.update_field(ContactField::Name, "A".into());
        assert!(form.errors().name.is_empty());
        assert_eq!(form.errors().email, EMAIL_REQUIRED);
        assert_eq!(form.errors().message, MESSAGE_REQUIRED);
    }

    #[test]
    fn typing_an_invalid_value_does_not_revalidate() {
        let mut form = ContactForm::new();
        let _ = form.begin_submit();
        form.update_field(ContactField::Email, "nope".into());
        assert!(form.errors().email.is_empty());
    }

    #[test]
    fn invalid_submit_stays_idle() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Invalid));
        assert_eq!(form.lifecycle(), Lifecycle::Idle);
    }

    #[test]
    fn delivered_clears_fields() {
        let mut form = filled_form();
        assert_eq!(form.lifecycle(), Lifecycle::Idle);

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.name, "Ada");
        assert_eq!(form.lifecycle(), Lifecycle::Sending);

        assert_eq!(form.settle(SinkOutcome::from_status(200)), Some(Notice::Sent));
        assert_eq!(form.lifecycle(), Lifecycle::Succeeded);
        assert_eq!(form.fields(), &ContactFields::default());

        form.acknowledge();
        assert_eq!(form.lifecycle(), Lifecycle::Idle);
    }

    #[test]
    fn server_error_keeps_fields() {
        let mut form = filled_form();
        let payload = form.begin_submit().unwrap();

        assert_eq!(form.settle(SinkOutcome::from_status(500)), Some(Notice::Failed));
        assert_eq!(form.lifecycle(), Lifecycle::Failed);
        assert_eq!(form.fields(), &payload);

        form.acknowledge();
        assert_eq!(form.lifecycle(), Lifecycle::Idle);
        assert_eq!(form.fields(), &payload);
    }

    #[test]
    fn transport_error_keeps_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let notice = form.settle(SinkOutcome::Unreachable("offline".into()));
        assert_eq!(notice, Some(Notice::Errored));
        assert!(notice.unwrap().is_error());
        assert_eq!(form.fields().email, "ada@example.com");
    }

    #[test]
    fn second_submit_while_sending_is_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert_eq!(form.lifecycle(), Lifecycle::Sending);
    }

    #[test]
    fn settle_without_submission_is_ignored() {
        let mut form = filled_form();
        assert_eq!(form.settle(SinkOutcome::Delivered), None);
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn status_mapping() {
        assert_eq!(SinkOutcome::from_status(204), SinkOutcome::Delivered);
        assert_eq!(SinkOutcome::from_status(400), SinkOutcome::Rejected(400));
        assert_eq!(SinkOutcome::from_status(429), SinkOutcome::Rejected(429));
    }

    #[test]
    fn payload_matches_backend_body() {
        let payload = serde_json::to_value(fields("Ada", "ada@example.com", "Hi")).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "Hi"})
        );
    }
}
