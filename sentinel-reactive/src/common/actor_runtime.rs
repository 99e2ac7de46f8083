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

use std::fmt::Debug;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, trace};

use crate::actor::{ActorConfig, Idle, ManagedActor};
use crate::common::runtime_inner::RuntimeInner;
use crate::common::{ActorHandle, ComponentId, MailboxRegistry, RegistryError, SentinelConfig};
use crate::message::{Envelope, MessageError};
use crate::traits::{Actor, ActorHandleInterface, SentinelMessage};

/// The composition root's view of a running system.
///
/// Creates actors, keeps their handles, starts them, and shuts them down.
/// Cloning yields another view onto the same system.
#[derive(Debug, Clone)]
pub struct ActorRuntime<M>(pub(crate) RuntimeInner<M>);

impl<M: SentinelMessage> ActorRuntime<M> {
    /// The shared mailbox registry.
    #[inline]
    pub fn registry(&self) -> &MailboxRegistry<M> {
        &self.0.registry
    }

    /// The configuration this runtime was launched with.
    #[inline]
    pub fn config(&self) -> &SentinelConfig {
        &self.0.config
    }

    /// Registry name of the security monitor.
    pub fn monitor_id(&self) -> ComponentId {
        self.0.config.monitor_id()
    }

    pub(crate) fn cancellation_token(&self) -> CancellationToken {
        self.0.cancellation_token.clone()
    }

    /// Creates an idle actor named `id` and registers its mailbox.
    pub fn new_actor<A>(
        &self,
        id: impl Into<ComponentId>,
        model: A,
    ) -> Result<ManagedActor<Idle, A>, RegistryError>
    where
        A: Actor<Message = M>,
    {
        self.new_actor_with_config(ActorConfig::new(id), model)
    }

    /// Creates an idle actor with explicit settings and registers its mailbox.
    pub fn new_actor_with_config<A>(
        &self,
        config: ActorConfig,
        model: A,
    ) -> Result<ManagedActor<Idle, A>, RegistryError>
    where
        A: Actor<Message = M>,
    {
        let new_actor = ManagedActor::new(self, config, model)?;
        trace!("Registering new top-level actor: {}", new_actor.id());
        self.0
            .roots
            .insert(new_actor.id().clone(), new_actor.handle().clone());
        Ok(new_actor)
    }

    /// Holds an idle actor until [`start_all`](Self::start_all).
    pub fn stage<A>(&self, actor: ManagedActor<Idle, A>)
    where
        A: Actor<Message = M>,
    {
        trace!("Staging actor: {}", actor.id());
        self.0.staged.lock().push(Box::new(actor));
    }

    /// Starts every staged actor, in staging order. Returns how many were started.
    pub fn start_all(&self) -> usize {
        let staged: Vec<_> = std::mem::take(&mut *self.0.staged.lock());
        let count = staged.len();
        for actor in staged {
            let id = actor.launch();
            trace!("Started actor: {}", id);
        }
        info!(count, "actors started");
        count
    }

    /// Sends a stop signal to every actor without waiting.
    pub fn stop_all(&self) {
        for entry in self.0.roots.iter() {
            if let Err(err) = entry.value().signal_stop() {
                trace!(component = %entry.key(), "stop not delivered: {err}");
            }
        }
    }

    /// Waits for every actor's run loop to finish.
    ///
    /// Actors still running when the system shutdown timeout expires are
    /// cancelled, which ends their loops at the next iteration boundary.
    #[instrument(skip(self))]
    pub async fn clean(&self) -> anyhow::Result<()> {
        let handles: Vec<ActorHandle<M>> =
            self.0.roots.iter().map(|e| e.value().clone()).collect();
        let wait_all = || {
            join_all(handles.iter().map(|handle| {
                let tracker = handle.tracker();
                tracker.close();
                async move { tracker.wait().await }
            }))
        };

        let timeout = self.0.config.system_shutdown_timeout();
        if tokio::time::timeout(timeout, wait_all()).await.is_err() {
            error!(
                "System-wide shutdown timeout reached after {:?}; cancelling remaining actors",
                timeout
            );
            self.0.cancellation_token.cancel();
            let grace = self.0.config.actor_shutdown_timeout();
            if tokio::time::timeout(grace, wait_all()).await.is_err() {
                let stuck: Vec<_> = handles
                    .iter()
                    .filter(|h| !h.is_stopped())
                    .map(|h| h.id().to_string())
                    .collect();
                error!(?stuck, "actors ignored cancellation");
                return Err(anyhow::anyhow!("actors did not stop: {}", stuck.join(", ")));
            }
        }
        self.0.roots.clear();
        info!("all actors stopped");
        Ok(())
    }

    /// Signals every actor to stop, then waits for them.
    pub async fn shutdown_all(&self) -> anyhow::Result<()> {
        self.stop_all();
        self.clean().await
    }

    /// Posts an envelope straight into its destination's mailbox.
    ///
    /// Used by drivers and tests to inject events; the security monitor is not
    /// consulted.
    pub fn inject(&self, envelope: Envelope<M>) -> Result<(), MessageError> {
        let mailbox = self
            .0
            .registry
            .lookup(envelope.destination().as_str())
            .ok_or_else(|| MessageError::UnknownDestination(envelope.destination().clone()))?;
        mailbox.post(envelope)
    }

    /// The handle of the actor named `name`.
    pub fn handle(&self, name: &str) -> Option<ActorHandle<M>> {
        self.0.roots.get(name).map(|e| e.value().clone())
    }

    /// Number of actors created and not yet cleaned up.
    #[inline]
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.0.roots.len()
    }
}
