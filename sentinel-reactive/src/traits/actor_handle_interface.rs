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
use std::future::Future;

use tokio_util::task::TaskTracker;

use crate::common::ComponentId;
use crate::message::{Envelope, MessageError};
use crate::traits::SentinelMessage;

/// Operations available on a handle to a running (or staged) actor.
pub trait ActorHandleInterface<M: SentinelMessage>: Send + Sync + Debug + Clone + 'static {
    /// The actor's registry name.
    fn id(&self) -> &ComponentId;

    /// Posts an envelope straight into the actor's event mailbox.
    ///
    /// This bypasses the security monitor; it exists for the composition root and
    /// for tests.
    fn post(&self, envelope: Envelope<M>) -> Result<(), MessageError>;

    /// Enqueues a stop signal on the control mailbox without waiting.
    fn signal_stop(&self) -> Result<(), MessageError>;

    /// The tracker that owns the actor's task.
    fn tracker(&self) -> TaskTracker;

    /// Signals stop and waits for the actor's task to finish.
    fn stop(&self) -> impl Future<Output = anyhow::Result<()>> + Send + '_;

    /// Returns `true` once the actor's task has finished.
    fn is_stopped(&self) -> bool {
        let tracker = self.tracker();
        tracker.is_closed() && tracker.is_empty()
    }
}
