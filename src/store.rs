//! Storage handle for ads. Constructed at startup and injected through `AppState`.

mod memory;
mod postgres;

pub use memory::MemoryAdStore;
pub use postgres::{ensure_schema, PgAdStore};

use crate::error::AppError;
use crate::model::{Ad, NewAd};
use async_trait::async_trait;

/// Each call is one unit of work: it either fully applies or leaves storage untouched.
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Persist a new ad; storage assigns `id` and `creation_date`.
    async fn insert(&self, ad: &NewAd) -> Result<Ad, AppError>;

    async fn get(&self, id: i32) -> Result<Option<Ad>, AppError>;

    /// Delete by id. Returns false when no such ad exists.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Cheap liveness probe used by the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}
