//! Service configuration.

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Service name reported by `/health` (default: "shopfront").
    pub service_name: String,

    /// Deployment environment label (default: "production").
    pub environment: String,

    /// Path to a JSON seed file. The built-in catalog is used when unset.
    pub seed_path: Option<String>,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            service_name: std::env::var("SERVICE_NAME").unwrap_or_else(|_| "shopfront".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "production".into()),
            seed_path: std::env::var("SEED_PATH").ok().filter(|s| !s.is_empty()),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            ),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            service_name: "shopfront".into(),
            environment: "production".into(),
            seed_path: None,
            cors_origins: vec!["*".into()],
            request_timeout_seconds: 30,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
