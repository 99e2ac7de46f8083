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

use std::sync::Arc;

use parking_lot::Mutex;
use sentinel_reactive::prelude::*;

use crate::setup::TestOp;

/// Remembers every envelope it receives and counts its ticks and stops.
#[sentinel_actor]
#[derive(Default)]
pub struct Recorder {
    pub seen: Arc<Mutex<Vec<Envelope<TestOp>>>>,
    pub ticks: Arc<Mutex<u64>>,
    pub stopped: Arc<Mutex<bool>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads seen so far, in arrival order.
    pub fn payloads(seen: &Mutex<Vec<Envelope<TestOp>>>) -> Vec<TestOp> {
        seen.lock().iter().map(|e| e.payload().clone()).collect()
    }
}

#[async_trait]
impl Actor for Recorder {
    type Message = TestOp;

    async fn on_event(
        &mut self,
        _ctx: &ActorContext<TestOp>,
        envelope: Envelope<TestOp>,
    ) -> anyhow::Result<()> {
        self.seen.lock().push(envelope);
        Ok(())
    }

    async fn on_tick(&mut self, _ctx: &ActorContext<TestOp>) -> anyhow::Result<()> {
        *self.ticks.lock() += 1;
        Ok(())
    }

    async fn before_stop(&mut self, _ctx: &ActorContext<TestOp>) -> anyhow::Result<()> {
        *self.stopped.lock() = true;
        Ok(())
    }
}
