//! In-process ads store for local runs (`DSN=memory:`) and tests.

use super::AdRepository;
use crate::error::AppError;
use crate::model::{Ad, NewAd};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    // Only grows, so ids are never reused after deletion.
    last_id: i32,
    rows: BTreeMap<i32, Ad>,
}

#[derive(Default)]
pub struct MemoryAdStore {
    inner: RwLock<Inner>,
}

impl MemoryAdStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }
}

#[async_trait]
impl AdRepository for MemoryAdStore {
    async fn insert(&self, ad: &NewAd) -> Result<Ad, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let row = Ad {
            id: inner.last_id,
            title: ad.title.clone(),
            description: ad.description.clone(),
            owner: ad.owner.clone(),
            creation_date: Some(chrono::Utc::now().naive_utc()),
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get(&self, id: i32) -> Result<Option<Ad>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
