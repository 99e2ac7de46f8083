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
use std::fmt::Debug;
use std::fmt::Formatter;
use std::marker::PhantomData;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

pub use idle::Idle;
pub use started::Started;

use crate::actor::ActorContext;
use crate::common::types::ControlReceiver;
use crate::common::{ActorHandle, ComponentId};
use crate::message::MailboxReceiver;
use crate::traits::Actor;

mod idle;
mod started;

/// An actor model wrapped with everything the runtime needs to drive it.
///
/// The `ActorState` parameter is a type-state marker: an actor is created
/// [`Idle`], where its model can still be configured, and becomes [`Started`]
/// when [`start`](ManagedActor::start) spawns its run loop.
pub struct ManagedActor<ActorState, A: Actor> {
    pub(crate) id: ComponentId,
    pub(crate) model: A,
    pub(crate) context: ActorContext<A::Message>,
    pub(crate) handle: ActorHandle<A::Message>,
    pub(crate) inbox: MailboxReceiver<A::Message>,
    pub(crate) control: ControlReceiver,
    pub(crate) tick_interval: Duration,
    pub(crate) drain_limit: usize,
    pub(crate) cancellation_token: CancellationToken,
    pub(crate) quit: bool,
    _actor_state: PhantomData<ActorState>,
}

impl<ActorState, A: Actor> ManagedActor<ActorState, A> {
    /// The actor's registry name.
    #[inline]
    pub const fn id(&self) -> &ComponentId {
        &self.id
    }

    /// The actor's handle.
    #[inline]
    pub const fn handle(&self) -> &ActorHandle<A::Message> {
        &self.handle
    }

    /// The context passed to every hook.
    #[inline]
    pub const fn context(&self) -> &ActorContext<A::Message> {
        &self.context
    }

    /// Pause between loop iterations.
    #[inline]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    // Moves every field across unchanged; only the marker differs.
    pub(crate) fn into_state<Next>(self) -> ManagedActor<Next, A> {
        ManagedActor {
            id: self.id,
            model: self.model,
            context: self.context,
            handle: self.handle,
            inbox: self.inbox,
            control: self.control,
            tick_interval: self.tick_interval,
            drain_limit: self.drain_limit,
            cancellation_token: self.cancellation_token,
            quit: self.quit,
            _actor_state: PhantomData,
        }
    }
}

impl<ActorState, A: Actor> Debug for ManagedActor<ActorState, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedActor")
            .field("id", &self.id)
            .field("model", &self.model)
            .field("tick_interval", &self.tick_interval)
            .finish_non_exhaustive()
    }
}
