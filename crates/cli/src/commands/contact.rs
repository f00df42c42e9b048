//! Contact and newsletter form commands.
//!
//! Validation failures print the message the user needs and exit cleanly;
//! the fix is to resubmit with corrected input.

use stumarcot_storefront::forms::{ContactForm, validate_newsletter_signup};

/// Validate and "send" a contact message.
pub fn submit(
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
) {
    let form = ContactForm {
        first_name,
        last_name,
        email,
        phone,
        subject,
        message,
    };

    match form.validate() {
        Ok(submission) => {
            tracing::info!(
                email = %submission.email,
                subject = %submission.subject,
                "contact message accepted"
            );
            println!("Thank you for your message! We will get back to you within 24 hours.");
        }
        Err(e) => println!("{e}"),
    }
}

/// Validate a newsletter signup address.
pub fn newsletter(email: &str) {
    match validate_newsletter_signup(email) {
        Ok(address) => {
            tracing::info!(email = %address, "newsletter signup accepted");
            println!("Thank you for subscribing to our newsletter!");
        }
        Err(e) => println!("{e}"),
    }
}
