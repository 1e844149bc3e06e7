//! Ad operations against an injected repository.

use crate::error::AppError;
use crate::model::AdView;
use crate::service::AdValidator;
use crate::store::AdRepository;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedAd {
    pub id: i32,
}

pub struct AdService;

impl AdService {
    /// Validate the raw body, then insert. Nothing is written when validation fails.
    pub async fn create(repo: &dyn AdRepository, body: &Value) -> Result<CreatedAd, AppError> {
        let new_ad = AdValidator::validate(body)?;
        let ad = repo.insert(&new_ad).await?;
        tracing::info!(id = ad.id, owner = %ad.owner, "ad created");
        Ok(CreatedAd { id: ad.id })
    }

    /// `id_str` is the raw path segment; a non-integer id reads as missing.
    pub async fn read(repo: &dyn AdRepository, id_str: &str) -> Result<AdView, AppError> {
        let not_found = || AppError::NotFound(format!("There are not ads with id: {}.", id_str));
        let id = parse_id(id_str).ok_or_else(not_found)?;
        let ad = repo.get(id).await?.ok_or_else(not_found)?;
        Ok(ad.into())
    }

    pub async fn delete(repo: &dyn AdRepository, id_str: &str) -> Result<(), AppError> {
        let not_found = || AppError::NotFound("Ads not found.".into());
        let id = parse_id(id_str).ok_or_else(not_found)?;
        if !repo.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!(id, "ad deleted");
        Ok(())
    }
}

fn parse_id(id_str: &str) -> Option<i32> {
    id_str.parse::<i32>().ok().filter(|id| *id >= 0)
}
