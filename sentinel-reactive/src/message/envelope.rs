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

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::ComponentId;
use crate::message::wire::{DecodeError, WireEnvelope};
use crate::traits::SentinelMessage;

/// The unit of communication between components.
///
/// An envelope is immutable once built. `source` names the sending component and
/// is the only identity the security monitor trusts; `None` marks an envelope
/// injected from outside any component, which no policy can authorize.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<M> {
    source: Option<ComponentId>,
    destination: ComponentId,
    payload: M,
}

impl<M: SentinelMessage> Envelope<M> {
    /// Builds an envelope from its three parts.
    pub fn new(
        source: Option<ComponentId>,
        destination: impl Into<ComponentId>,
        payload: M,
    ) -> Self {
        Self {
            source,
            destination: destination.into(),
            payload,
        }
    }

    /// Builds an envelope stamped with a known sending component.
    pub fn from_component(
        source: impl Into<ComponentId>,
        destination: impl Into<ComponentId>,
        payload: M,
    ) -> Self {
        Self::new(Some(source.into()), destination, payload)
    }

    /// Builds an envelope with no source, as injected by a test or an outside driver.
    pub fn external(destination: impl Into<ComponentId>, payload: M) -> Self {
        Self::new(None, destination, payload)
    }

    /// The sending component, if any.
    #[inline]
    pub fn source(&self) -> Option<&ComponentId> {
        self.source.as_ref()
    }

    /// The intended receiving component.
    #[inline]
    pub fn destination(&self) -> &ComponentId {
        &self.destination
    }

    /// The operation name, taken from the payload.
    #[inline]
    pub fn operation(&self) -> &'static str {
        self.payload.operation()
    }

    /// The typed parameters.
    #[inline]
    pub fn payload(&self) -> &M {
        &self.payload
    }

    /// Consumes the envelope, returning the payload.
    pub fn into_payload(self) -> M {
        self.payload
    }

    /// Converts to the flat wire shape.
    pub fn to_wire(&self) -> Result<WireEnvelope, DecodeError>
    where
        M: Serialize,
    {
        WireEnvelope::from_envelope(self)
    }

    /// Serializes to a JSON object with `source`, `destination`, `operation` and `parameters`.
    pub fn to_json(&self) -> Result<String, DecodeError>
    where
        M: Serialize,
    {
        let wire = self.to_wire()?;
        serde_json::to_string(&wire).map_err(|e| DecodeError::Malformed(e.to_string()))
    }

    /// Parses the JSON wire shape into a typed envelope.
    pub fn from_json(json: &str) -> Result<Self, DecodeError>
    where
        M: DeserializeOwned,
    {
        let wire: WireEnvelope =
            serde_json::from_str(json).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        wire.decode()
    }
}
