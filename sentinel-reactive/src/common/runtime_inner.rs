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
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::actor::{Idle, ManagedActor};
use crate::common::{ActorHandle, ComponentId, MailboxRegistry, SentinelConfig};
use crate::traits::{Actor, SentinelMessage};

/// An idle actor waiting for [`ActorRuntime::start_all`](crate::common::ActorRuntime::start_all).
pub(crate) trait StagedActor: Send {
    fn launch(self: Box<Self>) -> ComponentId;
}

impl<A: Actor> StagedActor for ManagedActor<Idle, A> {
    fn launch(self: Box<Self>) -> ComponentId {
        let id = self.id.clone();
        let _handle = (*self).start();
        id
    }
}

pub(crate) struct RuntimeInner<M> {
    pub(crate) registry: MailboxRegistry<M>,
    pub(crate) roots: Arc<DashMap<ComponentId, ActorHandle<M>>>,
    pub(crate) staged: Arc<Mutex<Vec<Box<dyn StagedActor>>>>,
    pub(crate) cancellation_token: CancellationToken,
    pub(crate) config: Arc<SentinelConfig>,
}

impl<M: SentinelMessage> RuntimeInner<M> {
    pub(crate) fn new(config: SentinelConfig) -> Self {
        Self {
            registry: MailboxRegistry::new(),
            roots: Arc::new(DashMap::new()),
            staged: Arc::new(Mutex::new(Vec::new())),
            cancellation_token: CancellationToken::new(),
            config: Arc::new(config),
        }
    }
}

impl<M> Clone for RuntimeInner<M> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            roots: Arc::clone(&self.roots),
            staged: Arc::clone(&self.staged),
            cancellation_token: self.cancellation_token.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<M> fmt::Debug for RuntimeInner<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeInner")
            .field("registry", &self.registry)
            .field("actors", &self.roots.len())
            .field("staged", &self.staged.lock().len())
            .finish_non_exhaustive()
    }
}
