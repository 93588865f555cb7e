use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::cvs::repo::{Cv, CvDraft, CvPatch};
use crate::error::AppError;

/// Persistence seam for CV documents. The editor session saves through this
/// contract, and tests substitute an in-memory implementation; the Postgres
/// implementation delegates to the same owner-scoped queries the HTTP
/// handlers use.
///
/// Ownership mismatches surface as `NotFound`, identical to a missing
/// record.
#[async_trait]
pub trait CvStore: Send + Sync {
    async fn create(&self, owner: Uuid, draft: CvDraft) -> Result<Cv, AppError>;
    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Cv, AppError>;
    async fn list(&self, owner: Uuid, limit: i64, offset: i64) -> Result<Vec<Cv>, AppError>;
    async fn update(&self, owner: Uuid, id: Uuid, patch: CvPatch) -> Result<Cv, AppError>;
    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), AppError>;
}

/// Postgres-backed store used in production.
pub struct PgCvStore {
    db: PgPool,
}

impl PgCvStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CvStore for PgCvStore {
    async fn create(&self, owner: Uuid, draft: CvDraft) -> Result<Cv, AppError> {
        Ok(Cv::create(&self.db, owner, draft).await?)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Cv, AppError> {
        Cv::get_owned(&self.db, owner, id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list(&self, owner: Uuid, limit: i64, offset: i64) -> Result<Vec<Cv>, AppError> {
        Ok(Cv::list_by_owner(&self.db, owner, limit, offset).await?)
    }

    async fn update(&self, owner: Uuid, id: Uuid, patch: CvPatch) -> Result<Cv, AppError> {
        Cv::update_owned(&self.db, owner, id, patch)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), AppError> {
        if Cv::delete_owned(&self.db, owner, id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use sqlx::types::Json;
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;

    use super::CvStore;
    use crate::cvs::repo::{Cv, CvDraft, CvPatch};
    use crate::error::AppError;

    /// In-memory store mirroring the SQL semantics: owner-scoped lookups,
    /// COALESCE-style shallow merge, updated-at bump on every update. A
    /// logical clock stands in for wall time so ordering is deterministic.
    #[derive(Default)]
    pub struct InMemoryCvStore {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        records: HashMap<Uuid, Cv>,
        clock: i64,
    }

    impl Inner {
        fn tick(&mut self) -> OffsetDateTime {
            self.clock += 1;
            OffsetDateTime::UNIX_EPOCH + Duration::seconds(self.clock)
        }
    }

    #[async_trait]
    impl CvStore for InMemoryCvStore {
        async fn create(&self, owner: Uuid, draft: CvDraft) -> Result<Cv, AppError> {
            let mut inner = self.inner.lock().unwrap();
            let now = inner.tick();
            let cv = Cv {
                id: Uuid::new_v4(),
                user_id: owner,
                title: draft.title,
                layout: draft.layout,
                data: Json(draft.data),
                is_paid: false,
                thumbnail: draft.thumbnail,
                created_at: now,
                updated_at: now,
            };
            inner.records.insert(cv.id, cv.clone());
            Ok(cv)
        }

        async fn get(&self, owner: Uuid, id: Uuid) -> Result<Cv, AppError> {
            let inner = self.inner.lock().unwrap();
            inner
                .records
                .get(&id)
                .filter(|cv| cv.user_id == owner)
                .cloned()
                .ok_or(AppError::NotFound)
        }

        async fn list(&self, owner: Uuid, limit: i64, offset: i64) -> Result<Vec<Cv>, AppError> {
            let inner = self.inner.lock().unwrap();
            let mut items: Vec<Cv> = inner
                .records
                .values()
                .filter(|cv| cv.user_id == owner)
                .cloned()
                .collect();
            items.sort_by(|a, b| {
                b.updated_at
                    .cmp(&a.updated_at)
                    .then(b.created_at.cmp(&a.created_at))
            });
            Ok(items
                .into_iter()
                .skip(offset.max(0) as usize)
                .take(limit.max(0) as usize)
                .collect())
        }

        async fn update(&self, owner: Uuid, id: Uuid, patch: CvPatch) -> Result<Cv, AppError> {
            let mut inner = self.inner.lock().unwrap();
            let now = inner.tick();
            let cv = inner
                .records
                .get_mut(&id)
                .filter(|cv| cv.user_id == owner)
                .ok_or(AppError::NotFound)?;
            if let Some(title) = patch.title {
                cv.title = title;
            }
            if let Some(layout) = patch.layout {
                cv.layout = layout;
            }
            if let Some(data) = patch.data {
                cv.data = Json(data);
            }
            if let Some(thumbnail) = patch.thumbnail {
                cv.thumbnail = Some(thumbnail);
            }
            if let Some(is_paid) = patch.is_paid {
                cv.is_paid = is_paid;
            }
            cv.updated_at = now;
            Ok(cv.clone())
        }

        async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), AppError> {
            let mut inner = self.inner.lock().unwrap();
            let owned = inner
                .records
                .get(&id)
                .map(|cv| cv.user_id == owner)
                .unwrap_or(false);
            if !owned {
                return Err(AppError::NotFound);
            }
            inner.records.remove(&id);
            Ok(())
        }
    }

    /// Store whose every operation fails, for save-failure paths.
    pub struct FailingCvStore;

    #[async_trait]
    impl CvStore for FailingCvStore {
        async fn create(&self, _owner: Uuid, _draft: CvDraft) -> Result<Cv, AppError> {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        }
        async fn get(&self, _owner: Uuid, _id: Uuid) -> Result<Cv, AppError> {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        }
        async fn list(&self, _owner: Uuid, _limit: i64, _offset: i64) -> Result<Vec<Cv>, AppError> {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        }
        async fn update(&self, _owner: Uuid, _id: Uuid, _patch: CvPatch) -> Result<Cv, AppError> {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        }
        async fn delete(&self, _owner: Uuid, _id: Uuid) -> Result<(), AppError> {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::InMemoryCvStore;
    use super::*;
    use crate::resume::{BasicInfo, ResumeData};
    use uuid::Uuid;

    fn draft(title: &str) -> CvDraft {
        CvDraft {
            title: title.into(),
            layout: "layout-1".into(),
            data: ResumeData {
                basic: BasicInfo {
                    name: Some("Ada".into()),
                    ..Default::default()
                },
                ..Default::default()
            },
            thumbnail: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_the_caller_as_owner() {
        let store = InMemoryCvStore::default();
        let owner = Uuid::new_v4();
        let cv = store.create(owner, draft("Mine")).await.expect("create");
        assert_eq!(cv.user_id, owner);
    }

    #[tokio::test]
    async fn create_then_get_round_trips_the_document() {
        let store = InMemoryCvStore::default();
        let owner = Uuid::new_v4();
        let created = store.create(owner, draft("Mine")).await.expect("create");
        let fetched = store.get(owner, created.id).await.expect("get");
        assert_eq!(fetched.title, "Mine");
        assert_eq!(fetched.layout, "layout-1");
        assert_eq!(fetched.data.0.basic.name.as_deref(), Some("Ada"));
        assert!(!fetched.is_paid);
    }

    #[tokio::test]
    async fn foreign_records_are_indistinguishable_from_missing_ones() {
        let store = InMemoryCvStore::default();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let cv = store.create(owner, draft("Mine")).await.expect("create");

        let missing = Uuid::new_v4();
        assert!(matches!(
            store.get(stranger, cv.id).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            store.get(stranger, missing).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            store
                .update(stranger, cv.id, CvPatch::default())
                .await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            store.delete(stranger, cv.id).await,
            Err(AppError::NotFound)
        ));

        // The owner still sees the record untouched.
        assert!(store.get(owner, cv.id).await.is_ok());
    }

    #[tokio::test]
    async fn repeated_delete_reports_not_found() {
        let store = InMemoryCvStore::default();
        let owner = Uuid::new_v4();
        let cv = store.create(owner, draft("Mine")).await.expect("create");

        store.delete(owner, cv.id).await.expect("first delete");
        assert!(matches!(
            store.delete(owner, cv.id).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn partial_update_merges_shallowly() {
        let store = InMemoryCvStore::default();
        let owner = Uuid::new_v4();
        let cv = store.create(owner, draft("Mine")).await.expect("create");

        let patch = CvPatch {
            title: Some("New".into()),
            ..Default::default()
        };
        let updated = store.update(owner, cv.id, patch).await.expect("update");

        assert_eq!(updated.title, "New");
        assert_eq!(updated.layout, cv.layout);
        assert_eq!(updated.data.0, cv.data.0);
        assert_eq!(updated.thumbnail, cv.thumbnail);
        assert!(updated.updated_at > cv.updated_at);
    }

    #[tokio::test]
    async fn list_is_scoped_and_ordered_by_recency() {
        let store = InMemoryCvStore::default();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let first = store.create(owner, draft("First")).await.expect("create");
        let _second = store.create(owner, draft("Second")).await.expect("create");
        store.create(stranger, draft("Other")).await.expect("create");

        // Touching the older record moves it to the front.
        store
            .update(
                owner,
                first.id,
                CvPatch {
                    title: Some("First touched".into()),
                    ..Default::default()
                },
            )
            .await
            .expect("update");

        let page = store.list(owner, 10, 0).await.expect("list");
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "First touched");
        assert_eq!(page[1].title, "Second");

        let second_page = store.list(owner, 1, 1).await.expect("list");
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].title, "Second");
    }
}
