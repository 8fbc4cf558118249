use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{Router, http::StatusCode, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::configs::app::APP_CONFIG;
use crate::services::shutdown;

static READY: LazyLock<AtomicBool> = LazyLock::new(|| AtomicBool::new(false));
static DISCORD_CONNECTED: LazyLock<AtomicBool> = LazyLock::new(|| AtomicBool::new(false));

pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

pub struct HealthService;

impl HealthService {
    pub fn spawn() {
        let token = shutdown::get_token();
        tokio::spawn(async move {
            let metrics_handle = match init_metrics() {
                Ok(handle) => handle,
                Err(e) => {
                    tracing::error!(error = %e, "failed to install metrics recorder");
                    return;
                }
            };
            let app = Router::new()
                .route("/healthz", get(Self::health))
                .route(
                    "/metrics",
                    get({
                        let handle = metrics_handle.clone();
                        move || async move { handle.render() }
                    }),
                );
            let listener = match tokio::net::TcpListener::bind(&APP_CONFIG.health_addr).await {
                Ok(listener) => listener,
                Err(e) => {
                    tracing::error!(addr = %APP_CONFIG.health_addr, error = %e, "failed to bind health listener");
                    return;
                }
            };
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(async move { token.cancelled().await })
                .await
            {
                tracing::error!(error = %e, "health server crashed");
            }
        });
    }

    async fn health() -> (StatusCode, &'static str) {
        if READY.load(Ordering::Relaxed) && DISCORD_CONNECTED.load(Ordering::Relaxed) {
            (StatusCode::OK, "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "starting")
        }
    }

    pub fn set_ready(state: bool) {
        READY.store(state, Ordering::Relaxed);
    }

    pub fn set_discord(state: bool) {
        DISCORD_CONNECTED.store(state, Ordering::Relaxed);
    }
}
