use validator::ValidateEmail;

/// A syntactically valid email address, lowercased on parse.
///
/// Lowercasing happens before the uniqueness check and before storage, so
/// `A@x.com` and `a@x.com` count as the same waitlist entry.
#[derive(Debug)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        let email = email.to_lowercase();
        match ValidateEmail::validate_email(&email) {
            true => Ok(Self(email)),
            false => Err("Invalid email address".to_string()),
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
