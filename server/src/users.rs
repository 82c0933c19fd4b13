//! User directory: maps external subject identifiers to local user records.
//!
//! Both entry points are single upsert statements keyed on the schema's
//! `subject_id` uniqueness constraint, so concurrent first requests for the
//! same subject cannot create duplicate rows.

use sqlx::PgPool;

use crate::auth::VerifiedIdentity;
use crate::models::User;

/// Look up the caller's record, creating it from the identity's claims when
/// absent. Idempotent; existing records are returned untouched.
pub async fn ensure_user(pool: &PgPool, identity: &VerifiedIdentity) -> sqlx::Result<User> {
    let (email, name) = fallback_profile(identity, None, None);
    // DO UPDATE on a no-op column change so RETURNING yields the existing row.
    sqlx::query_as(
        r#"
        INSERT INTO users (subject_id, email, name)
        VALUES ($1, $2, $3)
        ON CONFLICT (subject_id)
        DO UPDATE SET subject_id = EXCLUDED.subject_id
        RETURNING *
        "#,
    )
    .bind(&identity.subject_id)
    .bind(&email)
    .bind(&name)
    .fetch_one(pool)
    .await
}

/// Registration upsert: like [`ensure_user`] but refreshes email/name from
/// the request body (falling back to the identity's claims).
pub async fn register_user(
    pool: &PgPool,
    identity: &VerifiedIdentity,
    email: Option<String>,
    name: Option<String>,
) -> sqlx::Result<User> {
    let (email, name) = fallback_profile(identity, email, name);
    sqlx::query_as(
        r#"
        INSERT INTO users (subject_id, email, name)
        VALUES ($1, $2, $3)
        ON CONFLICT (subject_id)
        DO UPDATE SET
            email = EXCLUDED.email,
            name = EXCLUDED.name,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(&identity.subject_id)
    .bind(&email)
    .bind(&name)
    .fetch_one(pool)
    .await
}

/// Plain lookup by subject identifier; no creation.
pub async fn find_by_subject(pool: &PgPool, subject_id: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as("SELECT * FROM users WHERE subject_id = $1")
        .bind(subject_id)
        .fetch_optional(pool)
        .await
}

/// Resolve email and name: explicit value, then the provider's claims, then
/// the documented defaults (email local-part for the name).
fn fallback_profile(
    identity: &VerifiedIdentity,
    email: Option<String>,
    name: Option<String>,
) -> (String, String) {
    let email = email
        .filter(|e| !e.trim().is_empty())
        .or_else(|| identity.email.clone())
        .unwrap_or_else(|| "user@example.com".to_string());
    let name = name
        .filter(|n| !n.trim().is_empty())
        .or_else(|| identity.name.clone())
        .unwrap_or_else(|| {
            email
                .split('@')
                .next()
                .filter(|s| !s.is_empty())
                .unwrap_or("User")
                .to_string()
        });
    (email, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: Option<&str>, name: Option<&str>) -> VerifiedIdentity {
        VerifiedIdentity {
            subject_id: "subject-1".into(),
            email: email.map(String::from),
            name: name.map(String::from),
        }
    }

    #[test]
    fn test_body_fields_win_over_claims() {
        let (email, name) = fallback_profile(
            &identity(Some("claim@example.com"), Some("Claim Name")),
            Some("body@example.com".into()),
            Some("Body Name".into()),
        );
        assert_eq!(email, "body@example.com");
        assert_eq!(name, "Body Name");
    }

    #[test]
    fn test_name_falls_back_to_email_local_part() {
        let (email, name) = fallback_profile(&identity(Some("ada@example.com"), None), None, None);
        assert_eq!(email, "ada@example.com");
        assert_eq!(name, "ada");
    }

    #[test]
    fn test_defaults_when_nothing_is_known() {
        let (email, name) = fallback_profile(&identity(None, None), None, None);
        assert_eq!(email, "user@example.com");
        assert_eq!(name, "user");
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    async fn test_concurrent_ensure_user_yields_one_row(pool: PgPool) {
        let identity = identity(Some("ada@example.com"), Some("Ada"));

        let (a, b) = tokio::join!(ensure_user(&pool, &identity), ensure_user(&pool, &identity));
        let a = a.unwrap();
        let b = b.unwrap();
        assert_eq!(a.id, b.id);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE subject_id = $1")
            .bind(&identity.subject_id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    async fn test_ensure_user_leaves_registered_profile_untouched(pool: PgPool) {
        let identity = identity(None, None);
        let registered = register_user(
            &pool,
            &identity,
            Some("ada@example.com".into()),
            Some("Ada".into()),
        )
        .await
        .unwrap();

        let ensured = ensure_user(&pool, &identity).await.unwrap();
        assert_eq!(ensured.id, registered.id);
        assert_eq!(ensured.email, "ada@example.com");
        assert_eq!(ensured.name, "Ada");
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    async fn test_register_refreshes_profile(pool: PgPool) {
        let identity = identity(Some("old@example.com"), Some("Old Name"));
        let created = register_user(&pool, &identity, None, None).await.unwrap();
        assert_eq!(created.email, "old@example.com");

        let updated = register_user(
            &pool,
            &identity,
            Some("new@example.com".into()),
            Some("New Name".into()),
        )
        .await
        .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.name, "New Name");

        assert!(find_by_subject(&pool, &identity.subject_id)
            .await
            .unwrap()
            .is_some());
        assert!(find_by_subject(&pool, "someone-else").await.unwrap().is_none());
    }

    #[test]
    fn test_blank_body_fields_are_ignored() {
        let (email, name) = fallback_profile(
            &identity(Some("claim@example.com"), Some("Claim Name")),
            Some("   ".into()),
            Some(String::new()),
        );
        assert_eq!(email, "claim@example.com");
        assert_eq!(name, "Claim Name");
    }
}
