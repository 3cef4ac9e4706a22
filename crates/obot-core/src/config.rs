use std::env;

/// API base used when nothing else is configured. Matches the address the
/// server listens on in local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Environment variable consulted by [`CoreConfig::from_env`].
pub const API_BASE_ENV: &str = "OBOT_API_BASE";

/// Core configuration shared by every front-end.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Base URL all API routes are built against, without a trailing slash.
    pub api_base: String,
}

impl CoreConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(&api_base.into()),
        }
    }

    /// Resolve the API base from the environment, falling back to the local
    /// development default.
    pub fn from_env() -> Self {
        match env::var(API_BASE_ENV) {
            Ok(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::default(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
