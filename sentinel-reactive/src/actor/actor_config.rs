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

use std::time::Duration;

use crate::common::ComponentId;

/// Per-actor settings supplied at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorConfig {
    id: ComponentId,
    tick_interval: Option<Duration>,
}

impl ActorConfig {
    /// Settings for an actor named `id`, inheriting the runtime's poll interval.
    pub fn new(id: impl Into<ComponentId>) -> Self {
        Self {
            id: id.into(),
            tick_interval: None,
        }
    }

    /// Overrides the pause between loop iterations for this actor.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = Some(interval);
        self
    }

    /// The actor's registry name.
    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    /// The explicit tick interval, if one was set.
    pub fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval
    }
}
