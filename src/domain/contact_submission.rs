use unicode_segmentation::UnicodeSegmentation;

use super::SubmitterEmail;
use super::SubmitterName;

/// The free-text body of a contact-form submission: non-empty, at most 5000
/// graphemes.
#[derive(Debug)]
pub struct Message(String);

impl Message {
    pub fn parse(message: String) -> Result<Self, String> {
        if message.is_empty() {
            return Err("Message is required".to_string());
        }
        if message.graphemes(true).count() > 5000 {
            return Err("Message is too long".to_string());
        }
        Ok(Self(message))
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Optional subject line, at most 255 graphemes.
#[derive(Debug)]
pub struct Subject(String);

impl Subject {
    pub fn parse(subject: String) -> Result<Self, String> {
        if subject.graphemes(true).count() > 255 {
            return Err("Subject is too long".to_string());
        }
        Ok(Self(subject))
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Optional phone number, at most 20 graphemes. No format check beyond
/// length; the form is a stub and nothing dials it.
#[derive(Debug)]
pub struct Phone(String);

impl Phone {
    pub fn parse(phone: String) -> Result<Self, String> {
        if phone.graphemes(true).count() > 20 {
            return Err("Phone number is too long".to_string());
        }
        Ok(Self(phone))
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str { &self.0 }
}

/// A validated contact-form submission. Never persisted; it lives only for
/// the duration of one request.
pub struct ContactSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub message: Message,
    pub subject: Option<Subject>,
    pub phone: Option<Phone>,
}
