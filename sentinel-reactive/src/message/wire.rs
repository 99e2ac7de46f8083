/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! The flat, serializable shape of an envelope.
//!
//! Components exchange typed [`Envelope`]s in memory. Anything arriving from
//! outside the process (a scenario file, a test fixture, a future transport) is
//! first read into a [`WireEnvelope`] and then decoded, which is where an unknown
//! operation name or ill-typed parameters get rejected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::common::ComponentId;
use crate::message::Envelope;
use crate::traits::SentinelMessage;

/// Reasons a wire envelope fails to decode into a typed one.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The operation name is not one the payload type knows.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),
    /// The operation is known but its parameters have the wrong shape.
    #[error("invalid parameters for `{operation}`: {reason}")]
    InvalidParameters {
        /// Operation whose parameters were rejected.
        operation: String,
        /// Deserializer message.
        reason: String,
    },
    /// The input is not an envelope at all.
    #[error("malformed envelope: {0}")]
    Malformed(String),
}

/// An envelope with its payload still in untyped form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEnvelope {
    /// Sending component, absent for external injections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ComponentId>,
    /// Receiving component.
    pub destination: ComponentId,
    /// Operation name.
    pub operation: String,
    /// Operation parameters, absent for operations that take none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

impl WireEnvelope {
    /// Flattens a typed envelope.
    pub fn from_envelope<M>(envelope: &Envelope<M>) -> Result<Self, DecodeError>
    where
        M: SentinelMessage + Serialize,
    {
        let (operation, parameters) = encode_payload(envelope.payload())?;
        Ok(Self {
            source: envelope.source().cloned(),
            destination: envelope.destination().clone(),
            operation,
            parameters,
        })
    }

    /// Decodes into a typed envelope.
    pub fn decode<M>(self) -> Result<Envelope<M>, DecodeError>
    where
        M: SentinelMessage + DeserializeOwned,
    {
        let payload = decode_payload::<M>(&self.operation, self.parameters)?;
        Ok(Envelope::new(self.source, self.destination, payload))
    }
}

/// Decodes an operation name and its parameters into a typed payload.
///
/// The payload type must use serde adjacent tagging with `operation` as the tag
/// and `parameters` as the content key.
pub fn decode_payload<M>(operation: &str, parameters: Option<Value>) -> Result<M, DecodeError>
where
    M: SentinelMessage + DeserializeOwned,
{
    if !M::knows_operation(operation) {
        return Err(DecodeError::UnknownOperation(operation.to_string()));
    }
    let mut object = Map::new();
    object.insert("operation".into(), Value::String(operation.to_string()));
    match parameters {
        None | Some(Value::Null) => {}
        Some(value) => {
            object.insert("parameters".into(), value);
        }
    }
    serde_json::from_value(Value::Object(object)).map_err(|e| DecodeError::InvalidParameters {
        operation: operation.to_string(),
        reason: e.to_string(),
    })
}

/// Splits a typed payload into its operation name and parameters.
pub fn encode_payload<M>(payload: &M) -> Result<(String, Option<Value>), DecodeError>
where
    M: SentinelMessage + Serialize,
{
    let value = serde_json::to_value(payload).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    let Value::Object(mut object) = value else {
        return Err(DecodeError::Malformed(format!(
            "payload `{}` did not serialize to an object",
            payload.operation()
        )));
    };
    let parameters = object.remove("parameters").filter(|v| !v.is_null());
    Ok((payload.operation().to_string(), parameters))
}
