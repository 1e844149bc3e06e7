//! Server setup: storage handle, middleware stack, listener.

use crate::config::{Config, Storage};
use crate::error::AppError;
use crate::routes;
use crate::state::AppState;
use crate::store::{ensure_schema, AdRepository, MemoryAdStore, PgAdStore};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Connect storage and create the ads table if absent.
pub async fn connect_storage(config: &Config) -> Result<Arc<dyn AdRepository>, AppError> {
    match &config.storage {
        Storage::Postgres(dsn) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(dsn)
                .await?;
            ensure_schema(&pool).await?;
            info!("ads schema ready");
            Ok(Arc::new(PgAdStore::new(pool)))
        }
        Storage::Memory => {
            warn!("using in-process storage; ads are lost on shutdown");
            Ok(Arc::new(MemoryAdStore::new()))
        }
    }
}

/// Application router with tracing and body-limit middleware.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes));
    routes::app(state).layer(middleware)
}

/// Run until Ctrl+C or SIGTERM.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let ads = connect_storage(&config).await?;
    let app = create_router(AppState::new(ads), config.max_body_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("received Ctrl+C, shutting down"),
        _ = terminate => warn!("received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(Arc::new(MemoryAdStore::new())), 64 * 1024)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
        let (status, body) = send(&app(), "GET", "/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "ok");
    }

    #[tokio::test]
    async fn test_ad_lifecycle() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/ads/",
            Some(json!({"title": "Car", "description": "Ford Transit, 2015.", "owner": "User_3"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        let id = body["id"].as_i64().unwrap();
        assert!(id > 0);

        let uri = format!("/ads/{}", id);
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"ads title": "Car", "ads description": "Ford Transit, 2015.", "owner": "User_3"})
        );

        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "successfully deleted"}));

        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"status": "error", "message": format!("There are not ads with id: {}.", id)})
        );

        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"status": "error", "message": "Ads not found."}));
    }

    #[tokio::test]
    async fn test_short_description_rejected() {
        let (status, body) = send(
            &app(),
            "POST",
            "/ads/",
            Some(json!({"title": "Car", "description": "short", "owner": "User_3"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"][0]["loc"], json!(["description"]));
        assert_eq!(body["message"][0]["msg"], "So little description.");
    }

    #[tokio::test]
    async fn test_each_length_rule_names_its_field() {
        let app = app();
        let cases = [
            ("title", json!({"title": "t".repeat(51), "description": "long enough text", "owner": "me"})),
            ("description", json!({"title": "Car", "description": "d".repeat(301), "owner": "me"})),
            ("owner", json!({"title": "Car", "description": "long enough text", "owner": "o".repeat(101)})),
        ];
        for (field, payload) in cases {
            let (status, body) = send(&app, "POST", "/ads/", Some(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", field);
            assert_eq!(body["message"][0]["loc"][0], field);
        }
    }

    #[tokio::test]
    async fn test_missing_ids_and_bad_bodies() {
        let app = app();
        let (status, _) = send(&app, "GET", "/ads/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "DELETE", "/ads/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "GET", "/ads/not-a-number", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let req = Request::builder()
            .method("POST")
            .uri("/ads/")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_list_and_update_not_offered() {
        let app = app();
        let (status, body) = send(&app, "GET", "/ads/", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], "Listing ads is not supported.");
        let (status, _) = send(&app, "PATCH", "/ads/1", Some(json!({"title": "x"}))).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
