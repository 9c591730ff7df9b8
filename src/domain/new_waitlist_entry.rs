use super::SubmitterEmail;
use super::SubmitterName;
use super::Suggestion;

/// A validated waitlist signup, ready to be inserted. Construct via
/// `TryFrom<WaitlistForm>` (see `routes::waitlist`); fields are checked in
/// declaration order and only the first violation is reported.
pub struct NewWaitlistEntry {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub suggestion: Option<Suggestion>,
}
