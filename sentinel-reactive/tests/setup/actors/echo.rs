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

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use sentinel_reactive::prelude::*;

use crate::setup::TestOp;

/// Re-posts every `Count(n)` to itself as `Count(n + 1)`.
#[sentinel_actor]
#[derive(Default)]
pub struct Echo {
    pub echoed: Arc<AtomicU32>,
}

#[async_trait]
impl Actor for Echo {
    type Message = TestOp;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<TestOp>,
        envelope: Envelope<TestOp>,
    ) -> anyhow::Result<()> {
        if let TestOp::Count(n) = envelope.payload() {
            self.echoed.fetch_add(1, Ordering::SeqCst);
            ctx.send_direct(ctx.id().clone(), TestOp::Count(n + 1))?;
        }
        Ok(())
    }
}
