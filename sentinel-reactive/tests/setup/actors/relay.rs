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

use sentinel_reactive::prelude::*;

use crate::setup::TestOp;

/// Sends `Ping` to `target`: through the monitor on `Forward`, straight to the
/// mailbox on `Hand`.
#[sentinel_actor]
#[derive(Default)]
pub struct Relay;

#[async_trait]
impl Actor for Relay {
    type Message = TestOp;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<TestOp>,
        envelope: Envelope<TestOp>,
    ) -> anyhow::Result<()> {
        match envelope.payload() {
            TestOp::Forward { target } => ctx.send_via_monitor(target.as_str(), TestOp::Ping)?,
            TestOp::Hand { target } => ctx.send_direct(target.as_str(), TestOp::Ping)?,
            _ => {}
        }
        Ok(())
    }
}
