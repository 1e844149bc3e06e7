//! PostgreSQL-backed ads table.

use super::AdRepository;
use crate::error::AppError;
use crate::model::{Ad, NewAd};
use async_trait::async_trait;
use sqlx::PgPool;

const ADS_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS ads (
        id SERIAL PRIMARY KEY,
        title VARCHAR(50) NOT NULL,
        description VARCHAR(300) NOT NULL,
        creation_date TIMESTAMP DEFAULT NOW(),
        owner VARCHAR(100) NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_ads_title ON ads (title)",
    "CREATE INDEX IF NOT EXISTS ix_ads_owner ON ads (owner)",
];

/// Create the `ads` table and its indexes if absent. Idempotent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for ddl in ADS_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct PgAdStore {
    pool: PgPool,
}

impl PgAdStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl AdRepository for PgAdStore {
    async fn insert(&self, ad: &NewAd) -> Result<Ad, AppError> {
        let sql = "INSERT INTO ads (title, description, owner) VALUES ($1, $2, $3) \
                   RETURNING id, title, description, owner, creation_date";
        tracing::debug!(sql = %sql, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let row: Ad = sqlx::query_as(sql)
            .bind(&ad.title)
            .bind(&ad.description)
            .bind(&ad.owner)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn get(&self, id: i32) -> Result<Option<Ad>, AppError> {
        let sql = "SELECT id, title, description, owner, creation_date FROM ads WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Ad>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = "DELETE FROM ads WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let deleted: Option<(i32,)> = sqlx::query_as(sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(deleted.is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
