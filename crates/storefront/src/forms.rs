//! Contact and newsletter form validation.
//!
//! Validation failures surface as one user-facing message; there is no
//! retry loop - the user corrects the input and resubmits.

use thiserror::Error;

use stumarcot_core::{Email, EmailError};

/// Errors surfaced to the user on invalid form input.
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more required fields were left empty.
    #[error("please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The email address is structurally invalid.
    #[error("please enter a valid email address: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Raw contact-form input, exactly as submitted.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional; not validated.
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A validated contact submission.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Required fields, in display order.
    const REQUIRED: [(&'static str, fn(&Self) -> &str); 5] = [
        ("first name", |f| &f.first_name),
        ("last name", |f| &f.last_name),
        ("email", |f| &f.email),
        ("subject", |f| &f.subject),
        ("message", |f| &f.message),
    ];

    /// Validate the submission.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingFields`] naming every empty required
    /// field, or [`FormError::InvalidEmail`] when the fields are present
    /// but the email does not parse.
    pub fn validate(self) -> Result<ContactSubmission, FormError> {
        let missing: Vec<&'static str> = Self::REQUIRED
            .iter()
            .filter(|(_, get)| get(&self).trim().is_empty())
            .map(|(label, _)| *label)
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let email = Email::parse(self.email.trim())?;
        let phone = self.phone.trim();
        let phone = (!phone.is_empty()).then(|| phone.to_owned());

        Ok(ContactSubmission {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email,
            phone,
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }
}

/// Validate a newsletter signup address.
///
/// # Errors
///
/// Returns [`FormError`] when the address is empty or malformed.
pub fn validate_newsletter_signup(email: &str) -> Result<Email, FormError> {
    if email.trim().is_empty() {
        return Err(FormError::MissingFields(vec!["email"]));
    }
    Ok(Email::parse(email.trim())?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_owned(),
            last_name: "Mensah".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: String::new(),
            subject: "Bulk order".to_owned(),
            message: "Do you deliver to Kumasi?".to_owned(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let submission = filled_form().validate().unwrap();
        assert_eq!(submission.email.as_str(), "ada@example.com");
        assert!(submission.phone.is_none());
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let form = ContactForm {
            first_name: String::new(),
            message: "   ".to_owned(),
            ..filled_form()
        };

        let err = form.validate().unwrap_err();
        match err {
            FormError::MissingFields(fields) => {
                assert_eq!(fields, vec!["first name", "message"]);
            }
            other => panic!("expected MissingFields, got {other}"),
        }
    }

    #[test]
    fn test_invalid_email() {
        let form = ContactForm {
            email: "not-an-email".to_owned(),
            ..filled_form()
        };
        assert!(matches!(form.validate(), Err(FormError::InvalidEmail(_))));
    }

    #[test]
    fn test_phone_is_optional_but_kept() {
        let form = ContactForm {
            phone: " 024 555 0199 ".to_owned(),
            ..filled_form()
        };
        let submission = form.validate().unwrap();
        assert_eq!(submission.phone.as_deref(), Some("024 555 0199"));
    }

    #[test]
    fn test_newsletter_signup() {
        assert!(validate_newsletter_signup("user@example.com").is_ok());
        assert!(validate_newsletter_signup("   ").is_err());
        assert!(validate_newsletter_signup("nope").is_err());
    }
}
