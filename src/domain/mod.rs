mod contact_submission;
mod new_waitlist_entry;
mod submitter_email;
mod submitter_name;
mod suggestion;

// allow external `use` statements to skip `new_waitlist_entry` etc
pub use contact_submission::ContactSubmission;
pub use contact_submission::Message;
pub use contact_submission::Phone;
pub use contact_submission::Subject;
pub use new_waitlist_entry::NewWaitlistEntry;
pub use submitter_email::SubmitterEmail;
pub use submitter_name::SubmitterName;
pub use suggestion::Suggestion;
