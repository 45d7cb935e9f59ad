use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Subject)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Fill this field")]
    Required,
    #[error("Enter a valid email")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
            Field::Subject => None,
        }
    }

    fn slot(&mut self, field: Field) -> Option<&mut Option<FieldError>> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Message => Some(&mut self.message),
            Field::Subject => None,
        }
    }

    pub fn clear(&mut self, field: Field) {
        if let Some(slot) = self.slot(field) {
            *slot = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL.into_iter().filter(|f| f.is_required()) {
            if self.get(field).trim().is_empty() {
                if let Some(slot) = errors.slot(field) {
                    *slot = Some(FieldError::Required);
                }
            }
        }
        // any non-empty raw value that fails the pattern is reported as malformed
        if !self.email.is_empty() && !is_valid_email(&self.email) {
            errors.email = Some(FieldError::InvalidEmail);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl ContactStatus {
    pub fn is_sending(self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending…"),
            Self::Success => Some("Message sent — thank you!"),
            Self::Error => Some("Failed to send. Try again later"),
        }
    }
}

/// Identifies one submission so late completions and stale clear timers
/// cannot touch a newer submission's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    AlreadySending,
    Invalid(FieldErrors),
}

/// Everything the contact section renders from, mutated only through its methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    message: ContactMessage,
    errors: FieldErrors,
    status: ContactStatus,
    generation: u64,
}

impl ContactForm {
    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    /// Editing a field drops its pending error.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.message.set(field, value);
        self.errors.clear(field);
    }

    /// Validates and moves to `Sending`. On success returns the payload to hand
    /// to the relay together with the generation to complete it with.
    pub fn begin_submit(&mut self) -> Result<(Generation, ContactMessage), SubmitBlocked> {
        if self.status.is_sending() {
            return Err(SubmitBlocked::AlreadySending);
        }
        match self.message.validate() {
            Ok(()) => self.errors = FieldErrors::default(),
            Err(errors) => {
                self.errors = errors.clone();
                return Err(SubmitBlocked::Invalid(errors));
            }
        }
        self.generation += 1;
        self.status = ContactStatus::Sending;
        Ok((Generation(self.generation), self.message.clone()))
    }

    /// Records the relay outcome. Returns the generation a clear timer should
    /// be armed with, or `None` if a newer submission has taken over.
    pub fn complete(&mut self, generation: Generation, sent: bool) -> Option<Generation> {
        if generation.0 != self.generation || !self.status.is_sending() {
            return None;
        }
        if sent {
            self.status = ContactStatus::Success;
            self.message = ContactMessage::default();
        } else {
            self.status = ContactStatus::Error;
        }
        Some(generation)
    }

    /// Returns true if the status was reset to idle.
    pub fn clear_status(&mut self, generation: Generation) -> bool {
        if generation.0 != self.generation || self.status.is_sending() {
            return false;
        }
        self.status = ContactStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("no@tld"));
        assert!(!is_valid_email("two@@at.com"));
        assert!(!is_valid_email(" space@lead.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validate_reports_per_field() {
        let message = ContactMessage {
            name: String::new(),
            email: "bad".to_string(),
            subject: String::new(),
            message: "hi".to_string(),
        };
        let errors = message.validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::Required));
        assert_eq!(errors.email, Some(FieldError::InvalidEmail));
        assert_eq!(errors.message, None);
    }

    #[test]
    fn test_validate_whitespace_is_empty() {
        let message = ContactMessage {
            name: "   ".to_string(),
            email: String::new(),
            subject: String::new(),
            message: "\n\t".to_string(),
        };
        let errors = message.validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Email), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Message), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Subject), None);
        assert_eq!(FieldError::Required.to_string(), "Fill this field");
    }

    #[test]
    fn test_whitespace_email_is_invalid() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "   ".to_string(),
            subject: String::new(),
            message: "hi".to_string(),
        };
        let errors = message.validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Message), None);
    }

    #[test]
    fn test_subject_is_optional() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_invalid_form_is_not_submitted() {
        let mut form = ContactForm::default();
        form.set_field(Field::Email, "bad".to_string());
        form.set_field(Field::Message, "hi".to_string());
        match form.begin_submit() {
            Err(SubmitBlocked::Invalid(errors)) => {
                assert!(errors.name.is_some());
                assert!(errors.email.is_some());
                assert!(errors.message.is_none());
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
        assert_eq!(form.status(), ContactStatus::Idle);

        form.set_field(Field::Name, "Ada".to_string());
        assert!(form.errors().name.is_none());
        assert!(form.errors().email.is_some());
    }

    #[test]
    fn test_failure_then_auto_clear() {
        let mut form = ContactForm::default();
        for field in Field::ALL {
            form.set_field(field, filled().get(field).to_string());
        }
        let (generation, payload) = form.begin_submit().unwrap();
        assert_eq!(payload, filled());
        assert_eq!(form.status(), ContactStatus::Sending);
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::AlreadySending));

        let timer = form.complete(generation, false).unwrap();
        assert_eq!(form.status(), ContactStatus::Error);
        // the message is kept so the user can resubmit
        assert_eq!(form.message(), &filled());

        assert!(form.clear_status(timer));
        assert_eq!(form.status(), ContactStatus::Idle);
        assert_eq!(form.status().notice(), None);
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = ContactForm::default();
        for field in Field::ALL {
            form.set_field(field, filled().get(field).to_string());
        }
        let (generation, _) = form.begin_submit().unwrap();
        form.complete(generation, true).unwrap();
        assert_eq!(form.status(), ContactStatus::Success);
        assert_eq!(form.message(), &ContactMessage::default());
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_submission() {
        let mut form = ContactForm::default();
        for field in Field::ALL {
            form.set_field(field, filled().get(field).to_string());
        }
        let (first, _) = form.begin_submit().unwrap();
        let stale = form.complete(first, false).unwrap();

        let (second, _) = form.begin_submit().unwrap();
        assert!(!form.clear_status(stale));
        assert_eq!(form.status(), ContactStatus::Sending);
        assert_eq!(form.complete(first, true), None);

        let timer = form.complete(second, true).unwrap();
        assert!(!form.clear_status(stale));
        assert_eq!(form.status(), ContactStatus::Success);
        assert!(form.clear_status(timer));
    }
}
