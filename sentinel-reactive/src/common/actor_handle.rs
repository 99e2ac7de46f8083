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
use std::future::Future;
use std::time::Duration;

use tokio_util::task::TaskTracker;
use tracing::{error, trace};

use crate::common::types::ControlSender;
use crate::common::ComponentId;
use crate::message::{ControlSignal, Envelope, Mailbox, MessageError};
use crate::traits::{ActorHandleInterface, SentinelMessage};

/// A cloneable reference to an actor owned by the runtime.
///
/// Holds the actor's event mailbox, the sending side of its control mailbox, and
/// the [`TaskTracker`] its run loop is spawned on.
pub struct ActorHandle<M> {
    id: ComponentId,
    mailbox: Mailbox<M>,
    control: ControlSender,
    tracker: TaskTracker,
    shutdown_timeout: Duration,
}

impl<M: SentinelMessage> ActorHandle<M> {
    pub(crate) fn new(
        id: ComponentId,
        mailbox: Mailbox<M>,
        control: ControlSender,
        shutdown_timeout: Duration,
    ) -> Self {
        Self {
            id,
            mailbox,
            control,
            tracker: TaskTracker::new(),
            shutdown_timeout,
        }
    }

    /// The actor's event mailbox.
    pub fn mailbox(&self) -> &Mailbox<M> {
        &self.mailbox
    }
}

impl<M: SentinelMessage> ActorHandleInterface<M> for ActorHandle<M> {
    #[inline]
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn post(&self, envelope: Envelope<M>) -> Result<(), MessageError> {
        self.mailbox.post(envelope)
    }

    fn signal_stop(&self) -> Result<(), MessageError> {
        trace!(component = %self.id, "stop signalled");
        self.control.send(ControlSignal::Stop)?;
        Ok(())
    }

    fn tracker(&self) -> TaskTracker {
        self.tracker.clone()
    }

    fn stop(&self) -> impl Future<Output = anyhow::Result<()>> + Send + '_ {
        async move {
            // A closed control channel means the loop already exited.
            if self.signal_stop().is_err() {
                trace!(component = %self.id, "control mailbox closed; actor already finished");
            }
            self.tracker.close();
            if tokio::time::timeout(self.shutdown_timeout, self.tracker.wait())
                .await
                .is_err()
            {
                error!(
                    component = %self.id,
                    "actor did not stop within {:?}",
                    self.shutdown_timeout
                );
                return Err(anyhow::anyhow!(
                    "actor `{}` did not stop within {:?}",
                    self.id,
                    self.shutdown_timeout
                ));
            }
            trace!(component = %self.id, "actor stopped");
            Ok(())
        }
    }
}

impl<M> Clone for ActorHandle<M> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            mailbox: self.mailbox.clone(),
            control: self.control.clone(),
            tracker: self.tracker.clone(),
            shutdown_timeout: self.shutdown_timeout,
        }
    }
}

impl<M> fmt::Debug for ActorHandle<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorHandle")
            .field("id", &self.id)
            .field("tasks", &self.tracker.len())
            .finish_non_exhaustive()
    }
}
