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

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, error, instrument, trace};

use crate::actor::ManagedActor;
use crate::common::ComponentId;
use crate::message::ControlSignal;
use crate::traits::Actor;

/// Type-state marker for an actor whose run loop has been spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Started;

type HookOutcome = Result<anyhow::Result<()>, Box<dyn Any + Send>>;

impl<A: Actor> ManagedActor<Started, A> {
    /// The run loop.
    ///
    /// Each iteration checks the control mailbox once, then handles the events
    /// already queued, then runs the tick hook, then pauses. Because control is checked
    /// before the drain, events queued ahead of a stop signal are still handled in
    /// the iteration that sees the signal.
    #[instrument(skip(self), fields(component = %self.id))]
    pub(crate) async fn wake(mut self) {
        let outcome = AssertUnwindSafe(self.model.after_start(&self.context))
            .catch_unwind()
            .await;
        report(&self.id, "after_start", outcome);
        debug!("actor running");

        loop {
            if self.quit || self.cancellation_token.is_cancelled() {
                break;
            }
            self.check_control();
            let handled = self.drain_events().await;
            if handled > 0 {
                trace!(handled, "mailbox drained");
            }
            if self.quit {
                continue;
            }
            let outcome = AssertUnwindSafe(self.model.on_tick(&self.context))
                .catch_unwind()
                .await;
            report(&self.id, "on_tick", outcome);

            tokio::select! {
                () = tokio::time::sleep(self.tick_interval) => {}
                () = self.cancellation_token.cancelled() => {}
            }
        }

        let outcome = AssertUnwindSafe(self.model.before_stop(&self.context))
            .catch_unwind()
            .await;
        report(&self.id, "before_stop", outcome);
        debug!("actor stopped");
    }

    fn check_control(&mut self) {
        match self.control.try_recv() {
            Ok(ControlSignal::Stop) => {
                debug!("stop received");
                self.quit = true;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                trace!("control mailbox disconnected");
                self.quit = true;
            }
        }
    }

    /// Handles the events that were queued when the pass began. Anything posted
    /// meanwhile, including by the handlers themselves, waits for the next pass.
    async fn drain_events(&mut self) -> usize {
        let queued = self.inbox.len();
        let budget = match self.drain_limit {
            0 => queued,
            limit => queued.min(limit),
        };
        let mut handled = 0;
        while handled < budget {
            let Some(envelope) = self.inbox.try_recv() else {
                break;
            };
            handled += 1;
            let operation = envelope.operation();
            trace!(operation, source = ?envelope.source(), "handling event");
            let outcome = AssertUnwindSafe(self.model.on_event(&self.context, envelope))
                .catch_unwind()
                .await;
            report(&self.id, operation, outcome);
        }
        handled
    }
}

fn report(id: &ComponentId, stage: &str, outcome: HookOutcome) {
    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            error!(component = %id, stage, "handler failed: {err:#}");
        }
        Err(panic) => {
            error!(
                component = %id,
                stage,
                "handler panicked: {}",
                panic_message(panic.as_ref())
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
