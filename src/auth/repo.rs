use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
///
/// `password_hash` is NULL for users created through an OAuth provider; such
/// accounts can never authenticate with a password.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub provider: String, // "local" or "google"
    pub provider_id: Option<String>,
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, phone, password_hash, provider, provider_id, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, phone, password_hash, provider, provider_id, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Login lookup: the identifier may be a username or an email.
    pub async fn find_by_identifier(db: &PgPool, identifier: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, phone, password_hash, provider, provider_id, created_at
            FROM users
            WHERE username = $1 OR email = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(db)
        .await
    }

    /// Registration uniqueness pre-check over both unique columns.
    pub async fn exists_by_username_or_email(
        db: &PgPool,
        username: &str,
        email: &str,
    ) -> sqlx::Result<bool> {
        let row: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE username = $1 OR email = $2")
                .bind(username)
                .bind(email)
                .fetch_optional(db)
                .await?;
        Ok(row.is_some())
    }

    pub async fn create_local(
        db: &PgPool,
        username: &str,
        email: &str,
        phone: Option<&str>,
        password_hash: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, phone, password_hash, provider)
            VALUES ($1, $2, $3, $4, 'local')
            RETURNING id, username, email, phone, password_hash, provider, provider_id, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(phone)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// First-login provisioning for a Google-verified identity.
    pub async fn create_google(
        db: &PgPool,
        username: &str,
        email: &str,
        provider_id: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, provider, provider_id)
            VALUES ($1, $2, 'google', $3)
            RETURNING id, username, email, phone, password_hash, provider, provider_id, created_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(provider_id)
        .fetch_one(db)
        .await
    }
}
