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

use crate::common::ComponentId;

/// Errors raised while delivering an envelope to a mailbox.
///
/// None of these are fatal: the envelope in question is dropped and the sender
/// carries on.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The receiving side of the mailbox is gone (its actor has stopped).
    #[error("Failed to send message: {0}")]
    SendFailed(String),
    /// No mailbox is registered under the destination name.
    #[error("no mailbox registered for `{0}`")]
    UnknownDestination(ComponentId),
    /// The security monitor's mailbox could not be found in the registry.
    #[error("security monitor `{0}` is not registered")]
    MonitorUnavailable(ComponentId),
    /// A component was handed an operation it has no handler for.
    #[error("`{component}` does not handle `{operation}`")]
    UnexpectedOperation {
        /// The component that received it.
        component: ComponentId,
        /// The operation name.
        operation: &'static str,
    },
}

/// Converts a `SendError` from Tokio's MPSC channel to a `MessageError`.
impl<T> From<tokio::sync::mpsc::error::SendError<T>> for MessageError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        Self::SendFailed("Channel closed".into())
    }
}
