use actix_web::web;
use actix_web::HttpResponse;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::ContactSubmission;
use crate::domain::Message;
use crate::domain::Phone;
use crate::domain::Subject;
use crate::domain::SubmitterEmail;
use crate::domain::SubmitterName;
use crate::utils::ErrorBody;

/// Raw contact-form payload; same deserialization policy as `WaitlistForm`
/// (all fields optional, unknown fields ignored, no coercion).
#[derive(Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
    subject: Option<String>,
    phone: Option<String>,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = String;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = SubmitterName::parse(form.name.unwrap_or_default())?;
        let email = SubmitterEmail::parse(form.email.unwrap_or_default())?;
        let message = Message::parse(form.message.unwrap_or_default())?;
        let subject = form.subject.map(Subject::parse).transpose()?;
        let phone = form.phone.map(Phone::parse).transpose()?;
        Ok(Self {
            name,
            email,
            message,
            subject,
            phone,
        })
    }
}

#[derive(Serialize)]
struct FormResponse {
    success: bool,
    message: &'static str,
}

/// `POST /api/form/submit`
///
/// Validation-only stub: nothing is persisted and no notification goes out.
/// Extension point for both.
#[tracing::instrument(name = "Processing form submission", skip(form))]
pub async fn submit_form(form: web::Json<ContactForm>) -> HttpResponse {
    let submission: ContactSubmission = match form.0.try_into() {
        Ok(s) => s,
        Err(e) => return HttpResponse::BadRequest().json(ErrorBody::new(e)),
    };
    log_submission(&submission);

    HttpResponse::Ok().json(FormResponse {
        success: true,
        message: "Form submitted successfully! We'll get back to you soon.",
    })
}

/// `POST /api/form/contact`
///
/// Same contract as `submit_form`, kept as a separate endpoint so the
/// contact flow can grow its own behaviour.
#[tracing::instrument(name = "Processing contact form", skip(form))]
pub async fn contact_form(form: web::Json<ContactForm>) -> HttpResponse {
    let submission: ContactSubmission = match form.0.try_into() {
        Ok(s) => s,
        Err(e) => return HttpResponse::BadRequest().json(ErrorBody::new(e)),
    };
    log_submission(&submission);

    HttpResponse::Ok().json(FormResponse {
        success: true,
        message: "Thank you for contacting us! We'll respond soon.",
    })
}

/// Record enough of the submission to follow up manually until a real
/// delivery channel exists. The body is truncated.
fn log_submission(submission: &ContactSubmission) {
    let preview: String = submission.message.as_ref().chars().take(100).collect();
    tracing::info!(
        submitter_name = %submission.name.as_ref(),
        submitter_email = %submission.email.as_ref(),
        message_preview = %preview,
        "received form submission"
    );
}
