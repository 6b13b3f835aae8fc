//! The invoke bridge and its HTTP substitute
//!
//! Front-end code talks to the host through a single operation: invoke a named
//! command with a JSON argument mapping. Inside the native shell the host
//! provides that operation. Outside it, [`HttpBridge`] forwards each call as a
//! JSON POST to the dev server.
//!
//! The bridge is transport-only: it never looks at command names or results.

use crate::config::DevInvokeConfig;
use crate::error::{InvokeError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Types
// =============================================================================

/// Arguments passed to a command, keyed by parameter name
pub type InvokeArgs = serde_json::Map<String, Value>;

/// Which implementation sits behind the bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeKind {
    /// Provided by the native shell
    Native,
    /// Substitute that tunnels calls to a dev server
    DevHttp { endpoint: String },
}

/// Request body sent to the dev server
#[derive(Debug, Serialize)]
pub struct InvokePayload<'a> {
    pub cmd: &'a str,
    pub args: &'a InvokeArgs,
}

/// Error body the dev server may send with a non-2xx status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
}

// =============================================================================
// Bridge trait
// =============================================================================

/// The invoke entry point, real or simulated.
///
/// Results come back as opaque JSON; callers decode them explicitly
/// (see [`crate::commands::invoke_as`]).
#[async_trait]
pub trait InvokeBridge: Send + Sync {
    /// Dispatch `cmd` with `args` and wait for its JSON result
    async fn invoke(&self, cmd: &str, args: InvokeArgs) -> Result<Value>;

    /// Dispatch `cmd` with an empty argument mapping
    async fn invoke_without_args(&self, cmd: &str) -> Result<Value> {
        self.invoke(cmd, InvokeArgs::new()).await
    }

    fn kind(&self) -> BridgeKind;
}

// =============================================================================
// HTTP substitute
// =============================================================================

/// Bridge that sends every call to the dev server as `POST {cmd, args}`.
///
/// One request per call: no retries, no timeout, no caching.
#[derive(Debug, Clone)]
pub struct HttpBridge {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBridge {
    pub fn new(config: impl Into<DevInvokeConfig>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.into().endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InvokeBridge for HttpBridge {
    async fn invoke(&self, cmd: &str, args: InvokeArgs) -> Result<Value> {
        log::debug!("HTTP invoke: {} -> {}", cmd, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&InvokePayload { cmd, args: &args })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("HTTP invoke {} failed with status {}", cmd, status);
            let body = response.bytes().await.ok();
            return Err(InvokeError::Host {
                status: status.as_u16(),
                reason: error_reason(status.as_u16(), body.as_deref()),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn kind(&self) -> BridgeKind {
        BridgeKind::DevHttp {
            endpoint: self.endpoint.clone(),
        }
    }
}

/// Reason string for a non-2xx response.
///
/// Uses the body's `error` string when there is one; any decode failure is
/// swallowed here and replaced with `HTTP <status>`. This is the only place
/// the bridge suppresses an error.
fn error_reason(status: u16, body: Option<&[u8]>) -> String {
    body.and_then(|bytes| serde_json::from_slice::<ErrorBody>(bytes).ok())
        .and_then(|parsed| match parsed.error {
            Some(Value::String(reason)) if !reason.is_empty() => Some(reason),
            _ => None,
        })
        .unwrap_or_else(|| format!("HTTP {}", status))
}
