//! Ad record and its request/response shapes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted ad. `id` and `creation_date` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Ad {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub owner: String,
    pub creation_date: Option<NaiveDateTime>,
}

/// Validated input for a new ad.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub owner: String,
}

/// Body of `GET /ads/:id`.
#[derive(Debug, Serialize)]
pub struct AdView {
    #[serde(rename = "ads title")]
    pub title: String,
    #[serde(rename = "ads description")]
    pub description: String,
    pub owner: String,
}

impl From<Ad> for AdView {
    fn from(ad: Ad) -> Self {
        Self {
            title: ad.title,
            description: ad.description,
            owner: ad.owner,
        }
    }
}
