//! Contact form: validates the three fields and builds the WhatsApp deep link.

use tracing::info;

use crate::error::{Result, SiteError};

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All three fields are required; whitespace-only counts as empty.
    pub fn validate(&self) -> Result<()> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|f| f.trim().is_empty())
        {
            return Err(SiteError::IncompleteForm);
        }
        Ok(())
    }

    /// Text prefilled in the chat.
    pub fn whatsapp_text(&self) -> String {
        format!(
            "Hi, my name is {}. Email: {}. Message: {}",
            self.name, self.email, self.message
        )
    }

    /// `https://wa.me/<number>?text=<percent-encoded text>`; fails on an incomplete form.
    pub fn whatsapp_url(&self, number: &str) -> Result<String> {
        self.validate()?;
        let url = format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            number,
            urlencoding::encode(&self.whatsapp_text())
        );
        info!(number = %number, "Contact form redirected to WhatsApp");
        Ok(url)
    }

    /// Clears every field after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let form = ContactForm::new("Jane Doe", "jane@example.com", "Need an app!");
        let url = form.whatsapp_url("27785002274").unwrap();
        assert_eq!(
            url,
            "https://wa.me/27785002274?text=Hi%2C%20my%20name%20is%20Jane%20Doe.%20Email%3A%20jane%40example.com.%20Message%3A%20Need%20an%20app%21"
        );
    }

    #[test]
    fn test_incomplete_form_rejected() {
        let form = ContactForm::new("Jane", "", "Hello");
        assert!(matches!(
            form.whatsapp_url("27785002274"),
            Err(SiteError::IncompleteForm)
        ));
        assert!(ContactForm::new("Jane", "j@x.io", "   ").validate().is_err());
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = ContactForm::new("Jane", "j@x.io", "Hi");
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
