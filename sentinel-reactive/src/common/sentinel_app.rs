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

use tracing::trace;

use crate::common::config::CONFIG;
use crate::common::runtime_inner::RuntimeInner;
use crate::common::{ActorRuntime, SentinelConfig};
use crate::traits::SentinelMessage;

/// Entry point for building a Sentinel system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentinelApp;

impl SentinelApp {
    /// Launches a runtime with the globally loaded configuration.
    pub fn launch<M: SentinelMessage>() -> ActorRuntime<M> {
        Self::launch_with_config(CONFIG.clone())
    }

    /// Launches a runtime with explicit configuration.
    pub fn launch_with_config<M: SentinelMessage>(config: SentinelConfig) -> ActorRuntime<M> {
        trace!(?config, "launching runtime");
        ActorRuntime(RuntimeInner::new(config))
    }
}
