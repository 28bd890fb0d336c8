//! Public form intake: contact messages and newsletter subscriptions.

use thiserror::Error;

use crate::util::db::Db;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Result of a newsletter submission. `created` is false when the email was
/// already on file and the existing id is returned instead.
#[derive(Debug, Clone, Copy)]
pub struct SubscribeOutcome {
    pub id: i64,
    pub created: bool,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: Option<String>,
    pub email: String,
    pub message: String,
}

/// Canonical form used for subscriber deduplication.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Idempotent newsletter signup: at most one stored record per normalized
/// email. A concurrent insert losing the check-then-insert race against the
/// unique constraint is converted to the "already subscribed" outcome.
pub async fn subscribe_newsletter(db: &Db, raw_email: &str) -> Result<SubscribeOutcome, IntakeError> {
    let email = normalize_email(raw_email);
    if email.is_empty() {
        return Err(IntakeError::Validation("Email field is required"));
    }

    if let Some(id) = subscriber_id(db, &email).await? {
        return Ok(SubscribeOutcome { id, created: false });
    }

    match sqlx::query_scalar::<_, i64>(
        "INSERT INTO newsletter_subscriber (email) VALUES ($1) RETURNING id",
    )
    .bind(&email)
    .fetch_one(&db.pool)
    .await
    {
        Ok(id) => Ok(SubscribeOutcome { id, created: true }),
        Err(err) if is_unique_violation(&err) => match subscriber_id(db, &email).await? {
            Some(id) => Ok(SubscribeOutcome { id, created: false }),
            None => Err(IntakeError::Db(err)),
        },
        Err(err) => Err(err.into()),
    }
}

/// Contact submissions have no idempotency requirement: every valid one is
/// stored.
pub async fn submit_contact(db: &Db, submission: NewContactMessage) -> Result<i64, IntakeError> {
    let email = submission.email.trim();
    let message = submission.message.trim();
    if email.is_empty() || message.is_empty() {
        return Err(IntakeError::Validation("Email and message fields are required"));
    }
    let name = submission
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO contact_message (name, email, message) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(message)
    .fetch_one(&db.pool)
    .await?;
    Ok(id)
}

async fn subscriber_id(db: &Db, email: &str) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM newsletter_subscriber WHERE email = $1")
        .bind(email)
        .fetch_optional(&db.pool)
        .await
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_are_trimmed_and_lowercased() {
        assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
        assert_eq!(normalize_email("plain@ok.tm"), "plain@ok.tm");
    }

    #[test]
    fn whitespace_only_email_normalizes_to_empty() {
        assert_eq!(normalize_email("   "), "");
    }
}
