//! Contact page form state and social channels

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by a form submission backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Submission backend unavailable: {0}")]
    Unavailable(String),
}

pub type SubmitResult<T> = std::result::Result<T, SubmitError>;

/// Editable field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email Address",
            ContactField::Phone => "Contact Number",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::FirstName => "John",
            ContactField::LastName => "Doe",
            ContactField::Email => "john@example.com",
            ContactField::Phone => "+91 98765 43210",
            ContactField::Message => "Type your message...",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "tel",
            ContactField::FirstName | ContactField::LastName | ContactField::Message => "text",
        }
    }
}

/// Contents of the "Drop a Message" form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.message,
        ]
        .iter()
        .all(|v| v.trim().is_empty())
    }
}

/// Backend receiving contact form submissions
pub trait FormSubmitter {
    fn submit(&self, form: &ContactForm) -> SubmitResult<()>;
}

/// Accepts every submission without sending it anywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSubmitter;

impl FormSubmitter for NoopSubmitter {
    fn submit(&self, form: &ContactForm) -> SubmitResult<()> {
        tracing::debug!(
            email = %form.email,
            message_len = form.message.len(),
            "Contact form submitted (not forwarded)"
        );
        Ok(())
    }
}

/// A social network link shown on the Contact page and in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialChannel {
    pub name: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_CHANNELS: &[SocialChannel] = &[
    SocialChannel { name: "Facebook", href: "#" },
    SocialChannel { name: "Twitter", href: "#" },
    SocialChannel { name: "LinkedIn", href: "#" },
    SocialChannel { name: "Instagram", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;

    struct Refusing;

    impl FormSubmitter for Refusing {
        fn submit(&self, _form: &ContactForm) -> SubmitResult<()> {
            Err(SubmitError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn test_field_updates() {
        let mut form = ContactForm::default();
        assert!(form.is_blank());

        form.set(ContactField::FirstName, "Ada");
        form.set(ContactField::Phone, "+91 90000 00000");
        assert_eq!(form.get(ContactField::FirstName), "Ada");
        assert_eq!(form.phone, "+91 90000 00000");
        assert!(!form.is_blank());
    }

    #[test]
    fn test_noop_submit_keeps_form() {
        let mut form = ContactForm::default();
        form.set(ContactField::Message, "Hello");
        let before = form.clone();

        NoopSubmitter.submit(&form).unwrap();
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_error_surface() {
        let err = Refusing.submit(&ContactForm::default()).unwrap_err();
        assert_eq!(err.to_string(), "Submission backend unavailable: offline");
    }

    #[test]
    fn test_input_types() {
        assert_eq!(ContactField::Email.input_type(), "email");
        assert_eq!(ContactField::Phone.input_type(), "tel");
        assert_eq!(SOCIAL_CHANNELS.len(), 4);
    }
}
