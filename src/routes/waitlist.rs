use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use sqlx::error::DatabaseError;
use sqlx::PgPool;

use crate::domain::NewWaitlistEntry;
use crate::domain::SubmitterEmail;
use crate::domain::SubmitterName;
use crate::domain::Suggestion;
use crate::utils::error_chain_fmt;
use crate::utils::ErrorBody;

/// Raw signup payload. Every field is optional so that a missing field
/// surfaces as a validation message rather than a deserialization error;
/// unknown fields are silently ignored and nothing is coerced.
#[derive(Deserialize)]
pub struct WaitlistForm {
    name: Option<String>,
    email: Option<String>,
    suggestion: Option<String>,
}

impl TryFrom<WaitlistForm> for NewWaitlistEntry {
    type Error = String;

    /// Fields are checked in declaration order; `?` stops at the first
    /// violation, so exactly one message reaches the client.
    fn try_from(form: WaitlistForm) -> Result<Self, Self::Error> {
        let name = SubmitterName::parse(form.name.unwrap_or_default())?;
        let email = SubmitterEmail::parse(form.email.unwrap_or_default())?;
        // an empty suggestion is treated as absent and stored as NULL
        let suggestion = form
            .suggestion
            .filter(|s| !s.is_empty())
            .map(Suggestion::parse)
            .transpose()?;
        Ok(Self {
            name,
            email,
            suggestion,
        })
    }
}

#[derive(thiserror::Error)]
pub enum JoinError {
    #[error("{0}")]
    Validation(String),
    #[error("This email is already on the waitlist")]
    DuplicateEmail,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for JoinError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for JoinError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // store errors are logged in full server-side; the caller only ever
        // sees the opaque message
        let error = match self {
            Self::Unexpected(_) => "Failed to join waitlist. Please try again later.".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody::new(error))
    }
}

/// Echoed back on a successful signup. `suggestion` and the timestamp are
/// deliberately not included.
#[derive(Serialize, sqlx::FromRow)]
pub struct CreatedEntry {
    id: i32,
    name: String,
    email: String,
}

#[derive(Serialize)]
struct JoinResponse {
    success: bool,
    message: &'static str,
    data: CreatedEntry,
}

/// `POST /api/waitlist`
#[tracing::instrument(
    name = "Adding waitlist entry",
    skip(form, pool),
    fields(submitter_email = tracing::field::Empty)
)]
pub async fn join_waitlist(
    form: web::Json<WaitlistForm>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, JoinError> {
    let entry: NewWaitlistEntry = form.0.try_into().map_err(JoinError::Validation)?;
    tracing::Span::current().record(
        "submitter_email",
        tracing::field::display(entry.email.as_ref()),
    );

    let created = insert_entry(&pool, &entry).await?;
    Ok(HttpResponse::Created().json(JoinResponse {
        success: true,
        message: "Successfully joined the waitlist!",
        data: created,
    }))
}

/// Insert the entry. The UNIQUE constraint on email is the sole source of
/// the duplicate signal; there is no separate lookup, so two concurrent
/// signups for the same email cannot both succeed.
#[tracing::instrument(name = "INSERTing waitlist entry into db", skip(pool, entry))]
async fn insert_entry(
    pool: &PgPool,
    entry: &NewWaitlistEntry,
) -> Result<CreatedEntry, JoinError> {
    let suggestion: Option<&str> = entry.suggestion.as_ref().map(|s| s.as_ref());
    sqlx::query_as::<_, CreatedEntry>(
        "
    INSERT INTO waitlist (name, email, suggestion)
    VALUES ($1, $2, $3)
    RETURNING id, name, email
",
    )
    .bind(entry.name.as_ref())
    .bind(entry.email.as_ref())
    .bind(suggestion)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => JoinError::DuplicateEmail,
        e => {
            tracing::error!("bad query: {e:?}");
            JoinError::Unexpected(e.into())
        }
    })
}

/// A persisted waitlist row, serialized camelCase for the admin listing.
#[derive(Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    id: i32,
    name: String,
    email: String,
    suggestion: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for FetchError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for FetchError {
    fn status_code(&self) -> StatusCode { StatusCode::INTERNAL_SERVER_ERROR }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorBody::new("Failed to fetch waitlist entries"))
    }
}

#[derive(Serialize)]
struct ListResponse {
    success: bool,
    data: Vec<WaitlistEntry>,
}

/// `GET /api/waitlist`
///
/// Administrative inspection only: every entry, newest first, no pagination.
#[tracing::instrument(name = "Listing waitlist entries", skip(pool))]
pub async fn list_waitlist(pool: web::Data<PgPool>) -> Result<HttpResponse, FetchError> {
    let entries = fetch_entries(&pool).await?;
    Ok(HttpResponse::Ok().json(ListResponse {
        success: true,
        data: entries,
    }))
}

async fn fetch_entries(pool: &PgPool) -> Result<Vec<WaitlistEntry>, anyhow::Error> {
    let entries = sqlx::query_as::<_, WaitlistEntry>(
        "
    SELECT id, name, email, suggestion, created_at FROM waitlist
    ORDER BY created_at DESC
",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("bad query: {e:?}");
        e
    })?;
    Ok(entries)
}
