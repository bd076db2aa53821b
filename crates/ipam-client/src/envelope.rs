//! Response acknowledgment envelopes
//!
//! Write operations answer with `{code, msg: [message, id, ...]}` where a
//! non-zero code inside an HTTP-200 body is a soft failure. Deletes answer
//! with `{deleted}` carrying a boolean that some deployments encode as the
//! string `"true"`.

use anyhow::{bail, Result};
use serde::Deserialize;
use serde_json::Value;

use ipam_core::ProviderError;

/// Acknowledgment of a create or update call.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteAck {
    pub code: i64,
    #[serde(default)]
    pub msg: Vec<Value>,
}

impl WriteAck {
    /// Fail with the embedded message when the remote reports a soft error.
    pub fn ensure_ok(&self) -> Result<()> {
        if self.code != 0 {
            return Err(ProviderError::SoftApi {
                code: self.code,
                message: self.msg.first().map(scalar_to_string).unwrap_or_default(),
            }
            .into());
        }
        Ok(())
    }

    /// Identifier of the written record, at a fixed position in the
    /// message list. Numeric and string encodings both occur.
    pub fn record_id(&self) -> Result<String> {
        match self.msg.get(1) {
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            other => bail!("write acknowledgment missing record id: {:?}", other),
        }
    }
}

/// Acknowledgment of a delete call.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub deleted: Option<Value>,
}

impl DeleteAck {
    /// Verify the explicit deletion flag. Absent, malformed or false all
    /// mean the remote did not confirm removal.
    pub fn ensure_deleted(&self) -> Result<()> {
        let raw = match &self.deleted {
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        match raw.parse::<bool>() {
            Ok(true) => Ok(()),
            _ => Err(ProviderError::AcknowledgmentMismatch { value: raw }.into()),
        }
    }
}

/// Answer of the child-subnet carve endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChildSubnetAck {
    pub subnet_id: serde_json::Number,
}

/// Answer of the next-free-address endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestedIp {
    pub ip: String,
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
