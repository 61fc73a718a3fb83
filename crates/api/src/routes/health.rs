use std::time::{Duration, Instant};

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// A database ping slower than this counts as unhealthy.
const DB_PING_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Round trip of the ping; absent when it failed or timed out.
    pub db_latency_ms: Option<u64>,
    pub pool: PoolStatus,
}

/// Connection pool occupancy, for spotting exhaustion under wizard load.
#[derive(Debug, Serialize)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: usize,
    pub max_connections: u32,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let started = Instant::now();
    let ping = tokio::time::timeout(DB_PING_TIMEOUT, vowplan_db::health_check(&state.pool)).await;
    let db_healthy = matches!(ping, Ok(Ok(())));
    if !db_healthy {
        tracing::warn!("Database ping failed during health check");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_latency_ms: db_healthy.then(|| started.elapsed().as_millis() as u64),
        pool: PoolStatus {
            size: state.pool.size(),
            idle: state.pool.num_idle(),
            max_connections: state.config.db_max_connections,
        },
    })
}

/// Mounted at the root, outside `/api/v1` and without auth.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
