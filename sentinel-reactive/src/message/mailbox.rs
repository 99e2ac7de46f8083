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

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use crate::message::{Envelope, MessageError};
use crate::traits::SentinelMessage;

/// The sending side of a component's event queue.
///
/// Mailboxes are unbounded FIFO queues: posting never blocks, and envelopes from a
/// single poster are received in the order they were posted. Any number of
/// clones may post concurrently.
pub struct Mailbox<M> {
    sender: UnboundedSender<Envelope<M>>,
}

/// The receiving side of a component's event queue. Owned by exactly one actor.
pub struct MailboxReceiver<M> {
    receiver: UnboundedReceiver<Envelope<M>>,
}

impl<M: SentinelMessage> Mailbox<M> {
    /// Creates a connected mailbox pair.
    #[must_use]
    pub fn channel() -> (Self, MailboxReceiver<M>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, MailboxReceiver { receiver })
    }

    /// Enqueues an envelope without waiting.
    ///
    /// Fails only when the receiving actor has gone away.
    pub fn post(&self, envelope: Envelope<M>) -> Result<(), MessageError> {
        self.sender.send(envelope)?;
        Ok(())
    }

    /// Returns `true` once the receiving side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<M: SentinelMessage> MailboxReceiver<M> {
    /// Takes the next queued envelope, if one is waiting.
    pub fn try_recv(&mut self) -> Option<Envelope<M>> {
        match self.receiver.try_recv() {
            Ok(envelope) => Some(envelope),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Waits for the next envelope. Returns `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<Envelope<M>> {
        self.receiver.recv().await
    }

    /// Number of envelopes waiting.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Returns `true` when nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Takes everything currently queued, in order.
    pub fn drain(&mut self) -> Vec<Envelope<M>> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

impl<M> Clone for Mailbox<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<M> fmt::Debug for Mailbox<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailbox")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

impl<M> fmt::Debug for MailboxReceiver<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailboxReceiver").finish_non_exhaustive()
    }
}
