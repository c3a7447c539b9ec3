use std::env;
use std::str::FromStr;

/// Which recognition backend the service installs at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Deterministic content-hash scorer
    Placeholder,
    /// No backend: liveness-only mode, `/health` reports `ok`
    None,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(BackendKind::Placeholder),
            "none" | "disabled" => Ok(BackendKind::None),
            other => Err(anyhow::anyhow!("Unknown backend: {}", other)),
        }
    }
}

/// Request bodies carry whole base64 images
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend: BackendKind,
    pub match_threshold: f32,
    pub model_warmup_ms: u64,
    pub fetch_timeout_secs: u64,
    pub max_body_bytes: usize,
    pub greeting: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            backend: env::var("BACKEND")
                .unwrap_or_else(|_| "placeholder".to_string())
                .parse()?,
            match_threshold: env::var("MATCH_THRESHOLD")
                .unwrap_or_else(|_| "0.5".to_string())
                .parse()?,
            model_warmup_ms: env::var("MODEL_WARMUP_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()?,
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_BODY_BYTES.to_string())
                .parse()?,
            greeting: env::var("GREETING")
                .unwrap_or_else(|_| "Hello from face-compare".to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            backend: BackendKind::Placeholder,
            match_threshold: 0.5,
            model_warmup_ms: 0,
            fetch_timeout_secs: 30,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            greeting: "Hello from face-compare".to_string(),
            log_level: "info".to_string(),
        }
    }
}
