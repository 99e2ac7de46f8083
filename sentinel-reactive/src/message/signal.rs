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

use serde::{Deserialize, Serialize};

/// Out-of-band lifecycle signals delivered on an actor's control mailbox.
///
/// Control signals never pass through the security monitor: they are not
/// cross-domain data, only instructions from the owning container to one of its
/// actors. On the wire a signal looks like `{"operation": "stop"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ControlSignal {
    /// Ask the actor to finish its current iteration and leave its run loop.
    ///
    /// Stopping is cooperative: the actor sets its quit flag when it sees the
    /// signal, drains what is already queued, and exits at the top of the next
    /// iteration. Nothing is pre-empted.
    Stop,
}

impl ControlSignal {
    /// The operation name of the signal.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Stop => "stop",
        }
    }
}
