use crate::config::Config;
use crate::face::FaceBackend;
use crate::fetch::ImageFetcher;
use common::HealthState;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

/// Read-only view of whether the recognition backend has been installed
///
/// Handlers only see this handle. The backend is installed once through the
/// matching [`ReadinessSignal`] and never removed.
#[derive(Clone)]
pub struct Readiness {
    backend: Arc<OnceLock<Arc<dyn FaceBackend>>>,
    enabled: bool,
}

/// Single-use handle that installs the backend
pub struct ReadinessSignal {
    backend: Arc<OnceLock<Arc<dyn FaceBackend>>>,
}

impl Readiness {
    /// Readiness that starts `loading` until the returned signal fires
    pub fn pending() -> (Self, ReadinessSignal) {
        let backend = Arc::new(OnceLock::new());
        (
            Self {
                backend: backend.clone(),
                enabled: true,
            },
            ReadinessSignal { backend },
        )
    }

    /// Readiness with a backend already installed
    pub fn ready(backend: Arc<dyn FaceBackend>) -> Self {
        let (readiness, signal) = Self::pending();
        signal.ready(backend);
        readiness
    }

    /// Liveness-only mode: no backend will ever be installed
    pub fn disabled() -> Self {
        Self {
            backend: Arc::new(OnceLock::new()),
            enabled: false,
        }
    }

    pub fn status(&self) -> HealthState {
        if !self.enabled {
            HealthState::Ok
        } else if self.backend.get().is_some() {
            HealthState::Ready
        } else {
            HealthState::Loading
        }
    }

    pub fn backend(&self) -> Option<Arc<dyn FaceBackend>> {
        self.backend.get().cloned()
    }
}

impl ReadinessSignal {
    pub fn ready(self, backend: Arc<dyn FaceBackend>) {
        // The signal is consumed, so the cell can only be empty here
        let _ = self.backend.set(backend);
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub readiness: Readiness,
    pub fetcher: Arc<dyn ImageFetcher>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, readiness: Readiness, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            config: Arc::new(config),
            readiness,
            fetcher,
            started_at: Instant::now(),
        }
    }

    /// Whole seconds since the state was built
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
