//! Dev-Invoke: run a Tauri-style front-end outside the native shell
//!
//! Call [`setup_dev_invoke`] once at startup. Inside the native shell, which
//! has already provided its bridge, this does nothing. In a plain browser or
//! test harness it installs a bridge that forwards every `invoke` to the local
//! dev server as an HTTP POST.

mod bridge;
pub mod commands;
mod config;
mod error;
mod registry;

pub use bridge::{BridgeKind, HttpBridge, InvokeArgs, InvokeBridge, InvokePayload};
pub use commands::{invoke, invoke_as, to_args};
pub use config::{DevInvokeConfig, DEFAULT_ENDPOINT, DEFAULT_PORT};
pub use error::{InvokeError, Result};
pub use registry::{global_slot, BridgeSlot};

use std::sync::Arc;

/// Install the HTTP bridge on the default endpoint unless one is present
pub fn setup_dev_invoke() {
    setup_dev_invoke_with(DevInvokeConfig::default());
}

/// Install the HTTP bridge on a custom endpoint unless one is present
pub fn setup_dev_invoke_with(config: impl Into<DevInvokeConfig>) {
    global_slot().install(config);
}

/// Register the native shell's bridge in the process-wide slot
///
/// Must run before `setup_dev_invoke`; returns the bridge back if the slot is
/// already filled.
pub fn provide_native(
    bridge: Arc<dyn InvokeBridge>,
) -> std::result::Result<(), Arc<dyn InvokeBridge>> {
    global_slot().provide(bridge)
}
