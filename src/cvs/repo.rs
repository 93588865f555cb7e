use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::resume::ResumeData;

/// CV record in the database. The owner never changes after creation, and
/// every single-record query is scoped by `user_id` so an ownership mismatch
/// is indistinguishable from a missing row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub layout: String,
    pub data: Json<ResumeData>,
    pub is_paid: bool,
    pub thumbnail: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Full document for Create.
#[derive(Debug, Clone)]
pub struct CvDraft {
    pub title: String,
    pub layout: String,
    pub data: ResumeData,
    pub thumbnail: Option<String>,
}

/// Shallow-merge patch for Update: `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default)]
pub struct CvPatch {
    pub title: Option<String>,
    pub layout: Option<String>,
    pub data: Option<ResumeData>,
    pub thumbnail: Option<String>,
    pub is_paid: Option<bool>,
}

impl Cv {
    pub async fn create(db: &PgPool, user_id: Uuid, draft: CvDraft) -> sqlx::Result<Cv> {
        sqlx::query_as::<_, Cv>(
            r#"
            INSERT INTO cvs (user_id, title, layout, data, thumbnail)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, layout, data, is_paid, thumbnail, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(draft.title)
        .bind(draft.layout)
        .bind(Json(draft.data))
        .bind(draft.thumbnail)
        .fetch_one(db)
        .await
    }

    pub async fn list_by_owner(
        db: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<Cv>> {
        sqlx::query_as::<_, Cv>(
            r#"
            SELECT id, user_id, title, layout, data, is_paid, thumbnail, created_at, updated_at
            FROM cvs
            WHERE user_id = $1
            ORDER BY updated_at DESC, created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
    }

    pub async fn get_owned(db: &PgPool, user_id: Uuid, id: Uuid) -> sqlx::Result<Option<Cv>> {
        sqlx::query_as::<_, Cv>(
            r#"
            SELECT id, user_id, title, layout, data, is_paid, thumbnail, created_at, updated_at
            FROM cvs
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Shallow merge of the provided fields onto the stored record.
    pub async fn update_owned(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        patch: CvPatch,
    ) -> sqlx::Result<Option<Cv>> {
        sqlx::query_as::<_, Cv>(
            r#"
            UPDATE cvs
            SET title     = COALESCE($3, title),
                layout    = COALESCE($4, layout),
                data      = COALESCE($5, data),
                thumbnail = COALESCE($6, thumbnail),
                is_paid   = COALESCE($7, is_paid),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, layout, data, is_paid, thumbnail, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(patch.title)
        .bind(patch.layout)
        .bind(patch.data.map(Json))
        .bind(patch.thumbnail)
        .bind(patch.is_paid)
        .fetch_optional(db)
        .await
    }

    pub async fn delete_owned(db: &PgPool, user_id: Uuid, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM cvs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
