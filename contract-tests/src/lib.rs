//! Contract tests for the World Class Government APIs.
//!
//! The suites under `tests/` speak form-encoded HTTP to a deployment of the
//! registration and reservation API and assert on the feedback text.
//!
//! ## Usage
//!
//! ```bash
//! # Against external deployments (a `.env` file works too)
//! V1_URL=https://legacy.example.org/ URL=https://api.example.org/ \
//!     cargo test -p contract-tests
//!
//! # Without URLs each suite starts the in-process reference service
//! cargo test -p contract-tests
//! ```

pub mod client;
pub mod endpoints;

pub use client::{ApiResponse, GovernmentApiClient};
pub use endpoints::ServiceEndpoints;
pub use government_service::models::{ApiVersion, CitizenForm, ReservationForm};

use anyhow::{anyhow, Result};
use government_service::config::GovernmentConfig;
use government_service::Application;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,contract_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Start the reference service for `version` on a free local port and
/// return its base URL.
pub async fn spawn_reference_service(version: ApiVersion) -> Result<String> {
    let mut config = GovernmentConfig::for_version(version);
    config.common.port = 0;

    let app = Application::build(config)
        .await
        .map_err(|e| anyhow!("Failed to start reference government service: {}", e))?;
    let base_url = format!("http://127.0.0.1:{}/", app.port());

    tokio::spawn(async move {
        if let Err(e) = app.run_until_stopped().await {
            tracing::error!("Reference service stopped: {}", e);
        }
    });

    tracing::debug!(%base_url, api_version = %version, "Spawned reference service");
    Ok(base_url)
}

/// Poll the index page until the deployment answers with a success status.
pub async fn wait_for_service(base_url: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::new();
    let start = std::time::Instant::now();

    tracing::info!("Waiting for {} to answer...", base_url);

    loop {
        let failure = match client
            .get(base_url)
            .timeout(Duration::from_secs(2))
            .send()
            .await
        {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!("{} is up", base_url);
                return Ok(());
            }
            Ok(resp) => format!("status: {}", resp.status()),
            Err(e) => format!("error: {}", e),
        };

        if start.elapsed() > timeout {
            return Err(anyhow!(
                "Timeout waiting for {} ({})",
                base_url,
                failure
            ));
        }

        tracing::debug!("Waiting for {}: {}", base_url, failure);
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
}
