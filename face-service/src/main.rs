use face_service::{face, fetch, server, AppState, BackendKind, Config, Readiness};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Face service starting");
    tracing::info!("Port: {}", config.port);
    tracing::info!("Backend: {:?}", config.backend);
    tracing::info!("Match threshold: {}", config.match_threshold);

    let fetcher = fetch::HttpImageFetcher::new(Duration::from_secs(config.fetch_timeout_secs))?;

    // Models load in the background; /health reports "loading" until done
    let readiness = match config.backend {
        BackendKind::Placeholder => {
            let (readiness, signal) = Readiness::pending();
            face::loader::spawn_loader(config.clone(), signal);
            readiness
        }
        BackendKind::None => {
            tracing::warn!("No recognition backend configured, serving liveness only");
            Readiness::disabled()
        }
    };

    let port = config.port;
    let state = AppState::new(config, readiness, Arc::new(fetcher));

    server::start(port, state).await?;

    Ok(())
}
