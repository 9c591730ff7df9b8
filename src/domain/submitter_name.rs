use unicode_segmentation::UnicodeSegmentation;

/// A submitter's `name`, as accepted by both the waitlist and the contact
/// form: non-empty, at most 255 graphemes.
///
/// Must be instantiated with `SubmitterName::parse`. The field is left
/// private, to prevent bypassing of `parse`, and mutation of the value.
#[derive(Debug)]
pub struct SubmitterName(String);

impl SubmitterName {
    pub fn parse(name: String) -> Result<Self, String> {
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        if name.graphemes(true).count() > 255 {
            return Err("Name is too long".to_string());
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str { &self.0 }
}
