//! Process-wide setup inside the native shell: the shell's bridge must survive.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dev_invoke::{BridgeKind, InvokeArgs, InvokeBridge};
use serde_json::{json, Value};

#[derive(Default)]
struct ShellBridge {
    calls: AtomicUsize,
}

#[async_trait]
impl InvokeBridge for ShellBridge {
    async fn invoke(&self, cmd: &str, args: InvokeArgs) -> dev_invoke::Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "shell": cmd, "args": args }))
    }

    fn kind(&self) -> BridgeKind {
        BridgeKind::Native
    }
}

#[tokio::test]
async fn test_setup_leaves_native_bridge_untouched() {
    let _ = env_logger::builder().is_test(true).try_init();

    let shell = Arc::new(ShellBridge::default());
    let as_bridge: Arc<dyn InvokeBridge> = shell.clone();
    assert!(dev_invoke::provide_native(as_bridge.clone()).is_ok());

    dev_invoke::setup_dev_invoke();
    dev_invoke::setup_dev_invoke_with("http://127.0.0.1:1");

    let installed = dev_invoke::global_slot().get().unwrap();
    assert!(Arc::ptr_eq(installed, &as_bridge));

    let value = dev_invoke::invoke("ping", InvokeArgs::new()).await.unwrap();
    assert_eq!(value, json!({ "shell": "ping", "args": {} }));
    assert_eq!(shell.calls.load(Ordering::SeqCst), 1);
}
