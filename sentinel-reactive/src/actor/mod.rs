//! Actor plumbing: per-actor settings, the type-state wrapper that owns a model
//! and its mailboxes, and the context handed to every hook.

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

pub use actor_config::ActorConfig;
pub use context::ActorContext;
pub use managed_actor::{Idle, ManagedActor, Started};

mod actor_config;
mod context;
mod managed_actor;
