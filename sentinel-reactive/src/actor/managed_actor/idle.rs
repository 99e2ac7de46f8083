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

use std::marker::PhantomData;

use tokio::sync::mpsc;
use tracing::{instrument, trace};

use crate::actor::{ActorConfig, ActorContext, ManagedActor, Started};
use crate::common::{ActorHandle, ActorRuntime, RegistryError};
use crate::message::Mailbox;
use crate::traits::{Actor, ActorHandleInterface};

/// Type-state marker for an actor that has been created but not yet started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idle;

impl<A: Actor> ManagedActor<Idle, A> {
    /// Builds the actor and registers its mailbox.
    ///
    /// Registration happens here rather than at start so that peers can resolve
    /// the name while the composition root is still wiring components up.
    pub(crate) fn new(
        runtime: &ActorRuntime<A::Message>,
        config: ActorConfig,
        model: A,
    ) -> Result<Self, RegistryError> {
        let settings = runtime.config();
        let id = config.id().clone();
        let (mailbox, inbox) = Mailbox::channel();
        runtime.registry().register(id.clone(), mailbox.clone())?;

        let (control_tx, control) = mpsc::unbounded_channel();
        let handle = ActorHandle::new(
            id.clone(),
            mailbox,
            control_tx,
            settings.actor_shutdown_timeout(),
        );
        let context = ActorContext::new(
            id.clone(),
            settings.monitor_id(),
            runtime.registry().clone(),
        );

        trace!(component = %id, "actor created");
        Ok(Self {
            id,
            model,
            context,
            handle,
            inbox,
            control,
            tick_interval: config
                .tick_interval()
                .unwrap_or_else(|| settings.poll_interval()),
            drain_limit: settings.limits.drain_batch_limit,
            cancellation_token: runtime.cancellation_token(),
            quit: false,
            _actor_state: PhantomData,
        })
    }

    /// The wrapped model.
    pub fn model(&self) -> &A {
        &self.model
    }

    /// Mutable access to the model before the loop takes ownership of it.
    pub fn model_mut(&mut self) -> &mut A {
        &mut self.model
    }

    /// Spawns the run loop and returns the actor's handle.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(self), fields(component = %self.id))]
    pub fn start(self) -> ActorHandle<A::Message> {
        let handle = self.handle.clone();
        let tracker = handle.tracker();
        let actor: ManagedActor<Started, A> = self.into_state();
        tracker.spawn(actor.wake());
        tracker.close();
        trace!("actor task spawned");
        handle
    }
}
