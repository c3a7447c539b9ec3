use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use common::HealthStatus;

/// Health check endpoint
///
/// Always 200. `status` tracks model readiness, `uptime` is whole seconds
/// since startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: state.readiness.status(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.uptime_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::face::PlaceholderBackend;
    use crate::fetch::MockImageFetcher;
    use crate::state::Readiness;
    use common::HealthState;
    use std::sync::Arc;

    fn state_with(readiness: Readiness) -> AppState {
        AppState::new(
            Config::default(),
            readiness,
            Arc::new(MockImageFetcher::new()),
        )
    }

    #[tokio::test]
    async fn test_health_handler_ready() {
        let readiness = Readiness::ready(Arc::new(PlaceholderBackend::new(0.5)));
        let response = health_handler(State(state_with(readiness))).await;

        assert_eq!(response.status, HealthState::Ready);
    }

    #[tokio::test]
    async fn test_health_handler_loading() {
        let (readiness, _signal) = Readiness::pending();
        let response = health_handler(State(state_with(readiness))).await;

        assert_eq!(response.status, HealthState::Loading);
    }

    #[tokio::test]
    async fn test_health_handler_disabled() {
        let response = health_handler(State(state_with(Readiness::disabled()))).await;

        assert_eq!(response.status, HealthState::Ok);
    }

    #[tokio::test]
    async fn test_health_timestamp_is_iso8601() {
        let response = health_handler(State(state_with(Readiness::disabled()))).await;
        let timestamp = &response.timestamp;

        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(timestamp.ends_with('Z'));
        let bytes = timestamp.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b'T');
    }

    #[tokio::test]
    async fn test_health_uptime_non_decreasing() {
        let state = state_with(Readiness::disabled());

        let first = health_handler(State(state.clone())).await.uptime;
        let second = health_handler(State(state)).await.uptime;

        assert!(second >= first);
    }
}
