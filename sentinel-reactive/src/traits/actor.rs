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

use async_trait::async_trait;

use crate::actor::ActorContext;
use crate::message::Envelope;
use crate::traits::SentinelMessage;

/// The behaviour of a component.
///
/// The runtime owns the value and calls into it from a single task, one call at a
/// time, so handlers have exclusive `&mut self` access and need no locking.
/// Returning an error (or panicking) from any hook is logged and the run loop
/// moves on to the next event.
#[async_trait]
pub trait Actor: Send + Debug + 'static {
    /// The payload type this component exchanges.
    type Message: SentinelMessage;

    /// Handles one event taken from the component's mailbox.
    async fn on_event(
        &mut self,
        ctx: &ActorContext<Self::Message>,
        envelope: Envelope<Self::Message>,
    ) -> anyhow::Result<()>;

    /// Periodic work, run once per loop iteration after the mailbox is drained.
    async fn on_tick(&mut self, _ctx: &ActorContext<Self::Message>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs once inside the actor's task before the first iteration.
    async fn after_start(&mut self, _ctx: &ActorContext<Self::Message>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs once after the loop exits.
    async fn before_stop(&mut self, _ctx: &ActorContext<Self::Message>) -> anyhow::Result<()> {
        Ok(())
    }
}
