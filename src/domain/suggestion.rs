use unicode_segmentation::UnicodeSegmentation;

/// An optional free-text suggestion attached to a waitlist entry, at most
/// 1000 graphemes. An absent or empty suggestion is stored as NULL; the
/// empty-string case is handled by the caller (`NewWaitlistEntry`).
#[derive(Debug)]
pub struct Suggestion(String);

impl Suggestion {
    pub fn parse(suggestion: String) -> Result<Self, String> {
        if suggestion.graphemes(true).count() > 1000 {
            return Err("Suggestion is too long".to_string());
        }
        Ok(Self(suggestion))
    }
}

impl AsRef<str> for Suggestion {
    fn as_ref(&self) -> &str { &self.0 }
}
