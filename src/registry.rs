//! Set-once bridge registry and the installer
//!
//! A [`BridgeSlot`] holds at most one bridge for its whole lifetime. Whoever
//! fills it first wins: the native shell when present, otherwise the HTTP
//! substitute put there by [`BridgeSlot::install`].

use crate::bridge::{BridgeKind, HttpBridge, InvokeArgs, InvokeBridge};
use crate::commands::decode;
use crate::config::DevInvokeConfig;
use crate::error::{InvokeError, Result};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Process-wide slot used by [`crate::setup_dev_invoke`] and [`crate::invoke`]
static GLOBAL_SLOT: BridgeSlot = BridgeSlot::new();

pub fn global_slot() -> &'static BridgeSlot {
    &GLOBAL_SLOT
}

/// Single-slot registry with "first value wins, never overwritten" semantics.
pub struct BridgeSlot {
    bridge: OnceCell<Arc<dyn InvokeBridge>>,
}

impl BridgeSlot {
    pub const fn new() -> Self {
        Self {
            bridge: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Option<&Arc<dyn InvokeBridge>> {
        self.bridge.get()
    }

    pub fn is_present(&self) -> bool {
        self.bridge.get().is_some()
    }

    pub fn kind(&self) -> Option<BridgeKind> {
        self.get().map(|bridge| bridge.kind())
    }

    /// Store a bridge supplied by the native shell.
    ///
    /// Hands the bridge back if the slot is already taken.
    pub fn provide(
        &self,
        bridge: Arc<dyn InvokeBridge>,
    ) -> std::result::Result<(), Arc<dyn InvokeBridge>> {
        self.bridge.set(bridge).map_err(|rejected| {
            log::warn!(
                "Invoke bridge already present ({:?}), ignoring {:?}",
                self.kind(),
                rejected.kind()
            );
            rejected
        })
    }

    /// Make sure the slot holds a bridge.
    ///
    /// An existing bridge is left exactly as it is. An empty slot gets an
    /// [`HttpBridge`] pointed at `config`'s endpoint. Never fails.
    pub fn install(&self, config: impl Into<DevInvokeConfig>) {
        if let Some(existing) = self.get() {
            log::info!(
                "Invoke bridge already present ({:?}), no patching needed",
                existing.kind()
            );
            return;
        }

        let config = config.into();
        log::info!(
            "No native invoke bridge, routing invoke() to {}",
            config.endpoint
        );

        // Lost race: another thread filled the slot between get() and set()
        if self.bridge.set(Arc::new(HttpBridge::new(config))).is_err() {
            log::warn!("Invoke bridge was installed concurrently, keeping it");
        }
    }

    pub async fn invoke(&self, cmd: &str, args: InvokeArgs) -> Result<Value> {
        let bridge = self.get().ok_or(InvokeError::NotInstalled)?;
        bridge.invoke(cmd, args).await
    }

    /// [`BridgeSlot::invoke`] followed by an explicit decode into `T`
    pub async fn invoke_as<T: DeserializeOwned>(&self, cmd: &str, args: InvokeArgs) -> Result<T> {
        let value = self.invoke(cmd, args).await?;
        decode(cmd, value)
    }
}

impl Default for BridgeSlot {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
