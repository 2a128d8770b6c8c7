//! Router assembly and server lifecycle.

use axum::{
    middleware::from_fn,
    routing::{delete, get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::config::GovernmentConfig;
use crate::handlers;
use crate::models::ApiVersion;
use crate::services::{GovernmentService, InMemoryRegistry};

#[derive(Clone)]
pub struct AppState {
    pub service: GovernmentService,
}

impl AppState {
    pub fn new(config: GovernmentConfig) -> Self {
        let service = GovernmentService::new(
            Arc::new(InMemoryRegistry::new()),
            config.vaccines.clone(),
            config.api_version,
        );
        Self { service }
    }
}

/// Routes shared by both revisions plus the deletion routes of the
/// configured one.
pub fn build_router(state: AppState) -> Router {
    let version = state.service.version();

    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/registration_usage", get(handlers::registration_usage))
        .route("/reservation_usage", get(handlers::reservation_usage))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/registration", post(handlers::registration::register));

    let router = match version {
        ApiVersion::V1 => router
            .route(
                "/citizen",
                get(handlers::citizen::list_citizens).delete(handlers::citizen::remove_citizen),
            )
            .route(
                "/reservation",
                post(handlers::reservation::reserve)
                    .get(handlers::reservation::list_reservations)
                    .delete(handlers::reservation::cancel_reservation),
            ),
        ApiVersion::V2 => router
            .route("/citizen", get(handlers::citizen::list_citizens))
            .route(
                "/registration/:citizen_id",
                delete(handlers::registration::remove_registration),
            )
            .route(
                "/reservation",
                post(handlers::reservation::reserve).get(handlers::reservation::list_reservations),
            )
            .route(
                "/reservation/:citizen_id",
                delete(handlers::reservation::cancel_reservation_by_id),
            ),
    };

    router
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .with_state(state)
}

pub struct Application {
    port: u16,
    version: ApiVersion,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Bind the listener (port 0 picks a free port) and assemble the router.
    pub async fn build(config: GovernmentConfig) -> Result<Self, AppError> {
        let version = config.api_version;
        let state = AppState::new(config.clone());
        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            api_version = %version,
            vaccines = ?config.vaccines.names(),
            "Government service listening on port {}",
            port
        );

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            version,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    fn router(version: ApiVersion) -> Router {
        build_router(AppState::new(GovernmentConfig::for_version(version)))
    }

    async fn call(app: Router, method: Method, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn state_takes_version_and_catalog_from_config() {
        let mut config = GovernmentConfig::for_version(ApiVersion::V1);
        config.vaccines = crate::validation::VaccineCatalog::parse_list("Moderna");

        let state = AppState::new(config);
        assert_eq!(state.service.version(), ApiVersion::V1);
        assert!(state.service.catalog().contains("Moderna"));
        assert!(!state.service.catalog().contains("Pfizer"));

        let (_, body) = call(build_router(state), Method::GET, "/reservation_usage").await;
        assert!(body.contains("Available vaccines: [Moderna]"));
    }

    #[tokio::test]
    async fn v2_cancels_by_path() {
        let (status, body) =
            call(router(ApiVersion::V2), Method::DELETE, "/reservation/1234567890123").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("there is no reservation for this citizen"));
    }

    #[tokio::test]
    async fn v1_has_no_path_addressed_cancel() {
        let (status, _) =
            call(router(ApiVersion::V1), Method::DELETE, "/reservation/1234567890123").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn v1_cancels_by_query() {
        let (status, body) = call(
            router(ApiVersion::V1),
            Method::DELETE,
            "/reservation?citizen_id=1234567890123",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("cancel reservation failed"));
    }

    #[tokio::test]
    async fn v2_does_not_delete_through_citizen_listing() {
        let (status, _) = call(router(ApiVersion::V2), Method::DELETE, "/citizen").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
