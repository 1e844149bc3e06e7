//! Classified ads REST service: create, read and delete ads stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Config, Storage};
pub use error::{AppError, ConfigError};
pub use model::{Ad, AdView, NewAd};
pub use routes::{ads_routes, app, common_routes};
pub use server::{connect_storage, create_router, run};
pub use service::{AdService, AdValidator, FieldError};
pub use state::AppState;
pub use store::{ensure_schema, AdRepository, MemoryAdStore, PgAdStore};
