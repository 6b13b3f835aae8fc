//! Call-site helpers for application code
//!
//! These go through the process-wide slot, so the same call works whether the
//! native shell or the dev server is on the other end.
//! Results are opaque JSON until the caller decodes them with `invoke_as`.

use crate::bridge::InvokeArgs;
use crate::error::{InvokeError, Result};
use crate::registry::global_slot;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Invoke a command through whichever bridge is installed
///
/// Fails with `NotInstalled` if neither the native shell nor
/// `setup_dev_invoke` has filled the slot yet.
pub async fn invoke(cmd: &str, args: InvokeArgs) -> Result<Value> {
    global_slot().invoke(cmd, args).await
}

/// Invoke a command and decode its result into `T`
///
/// A result of the wrong shape surfaces as `InvokeError::Decode`.
pub async fn invoke_as<T: DeserializeOwned>(cmd: &str, args: InvokeArgs) -> Result<T> {
    global_slot().invoke_as(cmd, args).await
}

/// Decode an invoke result, tagging failures with the command name
pub fn decode<T: DeserializeOwned>(cmd: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| InvokeError::Decode {
        command: cmd.to_string(),
        source,
    })
}

/// Build an argument mapping from a typed argument struct
///
/// The value must serialize to a JSON object; anything else is rejected.
pub fn to_args<A: Serialize>(args: &A) -> Result<InvokeArgs> {
    match serde_json::to_value(args) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(InvokeError::InvalidArgs(format!(
            "expected an object, got {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(InvokeError::InvalidArgs(e.to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
