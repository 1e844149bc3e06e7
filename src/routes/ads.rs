//! Ads resource routes. `/ads` and `/ads/` are both accepted for create.

use crate::handlers::ads::{create, delete as delete_handler, list, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn ads_routes(state: AppState) -> Router {
    Router::new()
        .route("/ads/", get(list).post(create))
        .route("/ads", get(list).post(create))
        .route("/ads/:id", get(read).delete(delete_handler))
        .with_state(state)
}
