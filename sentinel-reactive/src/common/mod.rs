//! Runtime plumbing shared by every actor: identifiers, configuration, the
//! mailbox registry, actor handles, and the runtime that owns them.

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

pub use actor_handle::ActorHandle;
pub use actor_runtime::ActorRuntime;
pub use config::{ConfigError, SentinelConfig, CONFIG};
pub use registry::{MailboxRegistry, RegistryError};
pub use sentinel_app::SentinelApp;
pub use types::ComponentId;

mod actor_handle;
mod actor_runtime;
/// Configuration loaded from XDG locations.
pub mod config;
mod registry;
mod runtime_inner;
mod sentinel_app;
pub(crate) mod types;
