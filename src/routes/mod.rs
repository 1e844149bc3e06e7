//! Routers: ads resource and common service routes.

mod ads;
mod common;

pub use ads::ads_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;

/// Full application router: common routes plus the ads resource.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(ads_routes(state))
}
