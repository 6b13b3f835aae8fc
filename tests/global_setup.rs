//! Process-wide setup when no native bridge exists (plain browser / dev run).
//!
//! Lives in its own test binary: the global slot can only be filled once per
//! process, so everything that touches it runs inside a single test.

use std::sync::Arc;

use async_trait::async_trait;
use axum::routing::post;
use axum::{Json, Router};
use dev_invoke::{BridgeKind, InvokeArgs, InvokeBridge, InvokeError};
use serde::Deserialize;
use serde_json::{json, Value};

struct LateNative;

#[async_trait]
impl InvokeBridge for LateNative {
    async fn invoke(&self, _cmd: &str, _args: InvokeArgs) -> dev_invoke::Result<Value> {
        Err(InvokeError::Native("should never be called".to_string()))
    }

    fn kind(&self) -> BridgeKind {
        BridgeKind::Native
    }
}

#[derive(Debug, Deserialize)]
struct Echoed {
    cmd: String,
    args: Value,
}

#[tokio::test]
async fn test_global_setup_installs_http_bridge_once() {
    let _ = env_logger::builder().is_test(true).try_init();

    // Before setup: nothing to call.
    let err = dev_invoke::invoke("ping", InvokeArgs::new()).await.unwrap_err();
    assert!(matches!(err, InvokeError::NotInstalled));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    let router = Router::new().route("/", post(|Json(body): Json<Value>| async move { Json(body) }));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    dev_invoke::setup_dev_invoke_with(endpoint.as_str());
    // A later default setup must not replace the configured bridge.
    dev_invoke::setup_dev_invoke();

    assert_eq!(
        dev_invoke::global_slot().kind(),
        Some(BridgeKind::DevHttp {
            endpoint: endpoint.clone()
        })
    );

    let args = dev_invoke::to_args(&json!({ "x": 1 })).unwrap();
    let echoed: Echoed = dev_invoke::invoke_as("ping", args).await.unwrap();
    assert_eq!(echoed.cmd, "ping");
    assert_eq!(echoed.args, json!({ "x": 1 }));

    // A native bridge arriving after installation is turned away.
    assert!(dev_invoke::provide_native(Arc::new(LateNative)).is_err());
    let value = dev_invoke::invoke("ping", InvokeArgs::new()).await.unwrap();
    assert_eq!(value, json!({ "cmd": "ping", "args": {} }));
}
