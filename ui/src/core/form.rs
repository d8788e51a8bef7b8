//! Contact form state and validation.
//!
//! Errors are stored by kind, never as rendered text, so a language switch
//! re-renders them from scratch.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::localize::LocalizedText;
use crate::core::submit::SubmitError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Required fields, in display order.
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control name, also used as the multipart field name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> LocalizedText {
        match self {
            Field::Name => LocalizedText::new("Name", "Nombre"),
            Field::Email => LocalizedText::new("Email", "Correo electrónico"),
            Field::Message => LocalizedText::new("Message", "Mensaje"),
        }
    }

    pub fn placeholder(self) -> LocalizedText {
        match self {
            Field::Name => LocalizedText::new("Your name", "Tu nombre"),
            Field::Email => LocalizedText::new("Your email", "Tu correo"),
            Field::Message => LocalizedText::new("How can we help?", "¿Cómo podemos ayudarte?"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingField,
    InvalidEmailFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// One error at most per field; a blank email only reports as missing.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors: Vec<FieldError> = Field::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .map(|field| FieldError {
                field,
                kind: ErrorKind::MissingField,
            })
            .collect();

        if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: Field::Email,
                kind: ErrorKind::InvalidEmailFormat,
            });
        }

        errors
    }

    /// Multipart body fields in submission order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        Field::REQUIRED
            .into_iter()
            .map(|field| (field.name(), self.value(field)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    /// Transport failed; the alert is pending until acknowledged.
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub form: ContactForm,
    pub errors: Vec<FieldError>,
    pub status: SubmitStatus,
}

impl FormState {
    /// Validate from scratch. Returns the payload to send when the form is
    /// valid and no request is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if matches!(self.status, SubmitStatus::Sending | SubmitStatus::Sent) {
            return None;
        }
        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(self.form.clone())
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        self.status = match outcome {
            Ok(()) => SubmitStatus::Sent,
            Err(_) => SubmitStatus::Failed,
        };
    }

    pub fn acknowledge_failure(&mut self) {
        if self.status == SubmitStatus::Failed {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn error_for(&self, field: Field) -> Option<ErrorKind> {
        self.errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.kind)
    }

    pub fn show_form(&self) -> bool {
        self.status != SubmitStatus::Sent
    }

    pub fn show_thank_you(&self) -> bool {
        self.status == SubmitStatus::Sent
    }
}
