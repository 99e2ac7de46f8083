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

use std::fmt;

use tracing::trace;

use crate::common::{ComponentId, MailboxRegistry};
use crate::message::{Envelope, MessageError};
use crate::traits::SentinelMessage;

/// What a running actor knows about its surroundings.
///
/// Every envelope built through a context carries the owning actor's id as its
/// source. Handlers have no way to build an envelope with a different source
/// through this type.
pub struct ActorContext<M> {
    id: ComponentId,
    monitor: ComponentId,
    registry: MailboxRegistry<M>,
}

impl<M: SentinelMessage> ActorContext<M> {
    /// Creates a context for the actor named `id`.
    pub fn new(
        id: impl Into<ComponentId>,
        monitor: impl Into<ComponentId>,
        registry: MailboxRegistry<M>,
    ) -> Self {
        Self {
            id: id.into(),
            monitor: monitor.into(),
            registry,
        }
    }

    /// The owning actor's name.
    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    /// The security monitor's name.
    pub fn monitor(&self) -> &ComponentId {
        &self.monitor
    }

    /// The shared registry.
    pub fn registry(&self) -> &MailboxRegistry<M> {
        &self.registry
    }

    /// Builds an envelope from this actor to `destination`.
    pub fn envelope(&self, destination: impl Into<ComponentId>, payload: M) -> Envelope<M> {
        Envelope::from_component(self.id.clone(), destination, payload)
    }

    /// Sends a cross-domain event: the envelope goes to the security monitor,
    /// which forwards it only if a policy allows it.
    pub fn send_via_monitor(
        &self,
        destination: impl Into<ComponentId>,
        payload: M,
    ) -> Result<(), MessageError> {
        let envelope = self.envelope(destination, payload);
        let monitor = self
            .registry
            .lookup(self.monitor.as_str())
            .ok_or_else(|| MessageError::MonitorUnavailable(self.monitor.clone()))?;
        trace!(
            source = %self.id,
            destination = %envelope.destination(),
            operation = envelope.operation(),
            "sending via monitor"
        );
        monitor.post(envelope)
    }

    /// The error a handler returns for a payload it does not handle.
    pub fn unexpected(&self, payload: &M) -> MessageError {
        MessageError::UnexpectedOperation {
            component: self.id.clone(),
            operation: payload.operation(),
        }
    }

    /// Delivers straight to `destination`'s mailbox with no policy check.
    ///
    /// Only for traffic between components of the same security domain.
    pub fn send_direct(
        &self,
        destination: impl Into<ComponentId>,
        payload: M,
    ) -> Result<(), MessageError> {
        let envelope = self.envelope(destination, payload);
        let mailbox = self
            .registry
            .lookup(envelope.destination().as_str())
            .ok_or_else(|| MessageError::UnknownDestination(envelope.destination().clone()))?;
        mailbox.post(envelope)
    }
}

impl<M> Clone for ActorContext<M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            monitor: self.monitor.clone(),
            registry: self.registry.clone(),
        }
    }
}

impl<M> fmt::Debug for ActorContext<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorContext")
            .field("id", &self.id)
            .field("monitor", &self.monitor)
            .finish_non_exhaustive()
    }
}
