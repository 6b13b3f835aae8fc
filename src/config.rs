//! Dev server endpoint configuration
//!
//! The endpoint is the only setting. It is passed in by the bootstrap code and
//! never read from the environment.

/// Port the dev-invoke HTTP server listens on by default
pub const DEFAULT_PORT: u16 = 3030;

/// Endpoint used when the bootstrap does not pass one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3030";

/// Where the substitute bridge sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevInvokeConfig {
    /// Full URL (scheme, host, port) the POST requests go to. Not validated.
    pub endpoint: String,
}

impl DevInvokeConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Loopback endpoint on a non-default port
    pub fn with_port(port: u16) -> Self {
        Self::with_endpoint(format!("http://localhost:{}", port))
    }
}

impl Default for DevInvokeConfig {
    fn default() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }
}

impl From<&str> for DevInvokeConfig {
    fn from(endpoint: &str) -> Self {
        Self::with_endpoint(endpoint)
    }
}

impl From<String> for DevInvokeConfig {
    fn from(endpoint: String) -> Self {
        Self::with_endpoint(endpoint)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
