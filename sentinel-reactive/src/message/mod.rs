//! Envelopes, mailboxes, control signals, and the wire shape.
//!
//! *   [`Envelope`]: an immutable `(source, destination, payload)` triple.
//! *   [`Mailbox`] / [`MailboxReceiver`]: the unbounded FIFO each component reads from.
//! *   [`ControlSignal`]: lifecycle instructions that travel on a separate queue.
//! *   [`WireEnvelope`]: the untyped form used at the edges, decoded with
//!     [`decode_payload`].

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

pub use envelope::Envelope;
pub use mailbox::{Mailbox, MailboxReceiver};
pub use message_error::MessageError;
pub use signal::ControlSignal;
pub use wire::{decode_payload, encode_payload, DecodeError, WireEnvelope};

mod envelope;
mod mailbox;
mod message_error;
mod signal;
mod wire;
