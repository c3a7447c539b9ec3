use crate::config::Config;
use crate::error::ServiceResult;
use crate::face::backend::{FaceBackend, PlaceholderBackend};
use crate::state::ReadinessSignal;
use std::sync::Arc;
use std::time::Duration;

/// Build the recognition backend described by the configuration
///
/// `model_warmup_ms` simulates the time a real model takes to load.
pub async fn load_backend(config: &Config) -> ServiceResult<Arc<dyn FaceBackend>> {
    if config.model_warmup_ms > 0 {
        tracing::info!("Warming up models for {}ms", config.model_warmup_ms);
        tokio::time::sleep(Duration::from_millis(config.model_warmup_ms)).await;
    }

    let backend = PlaceholderBackend::new(config.match_threshold);
    tracing::info!(
        "Placeholder backend ready (threshold {})",
        backend.threshold()
    );

    Ok(Arc::new(backend))
}

/// Load the backend in the background and flip readiness when done
///
/// A failed load is logged and readiness stays `loading`.
pub fn spawn_loader(config: Config, signal: ReadinessSignal) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match load_backend(&config).await {
            Ok(backend) => {
                signal.ready(backend);
                tracing::info!("Models loaded successfully");
            }
            Err(e) => {
                tracing::error!("Failed to load models: {}", e);
            }
        }
    })
}
