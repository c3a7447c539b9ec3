use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use common::GreetingResponse;

pub async fn root_handler(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: state.config.greeting.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fetch::MockImageFetcher;
    use crate::state::Readiness;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_root_handler() {
        let config = Config {
            greeting: "Hello from jenkins".to_string(),
            ..Config::default()
        };
        let state = AppState::new(
            config,
            Readiness::disabled(),
            Arc::new(MockImageFetcher::new()),
        );

        let response = root_handler(State(state)).await;

        assert_eq!(response.message, "Hello from jenkins");
    }
}
