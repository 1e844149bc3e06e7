//! Shared application state for all routes.

use crate::store::AdRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub ads: Arc<dyn AdRepository>,
}

impl AppState {
    pub fn new(ads: Arc<dyn AdRepository>) -> Self {
        Self { ads }
    }
}
