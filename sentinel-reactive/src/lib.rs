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

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Sentinel Reactive
//!
//! The messaging substrate for systems built from mutually distrusting
//! components. Each component runs as a cooperative actor with its own named
//! mailbox; components in different security domains never talk directly.
//! Instead they hand every event to a single trusted [`SecurityMonitor`],
//! which forwards it only if an explicit allow-list entry
//! `(source, destination, operation)` exists.
//!
//! ## Key Concepts
//!
//! - **Envelopes (`Envelope`)**: immutable `(source, destination, payload)`
//!   triples. The payload is a user enum implementing `SentinelMessage`.
//! - **Mailboxes (`Mailbox`, `MailboxRegistry`)**: unbounded FIFO queues,
//!   registered once under a unique name.
//! - **Actors (`Actor`, `ManagedActor`)**: a model plus a run loop that checks
//!   its control mailbox, drains events, ticks, and pauses. Type-state
//!   (`Idle`, `Started`) separates configuration from execution.
//! - **Security (`SecurityMonitor`, `PolicySet`)**: default-deny authorization
//!   of cross-domain traffic.
//! - **Runtime (`ActorRuntime`)**: creates, starts, and stops actors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sentinel_reactive::prelude::*;
//!
//! #[sentinel_message]
//! enum Ops {
//!     Ping,
//! }
//! ```

/// Identifiers, configuration, the registry, handles, and the runtime.
pub mod common;

/// Actor wrappers, per-actor settings, and the handler context.
pub mod actor;

/// Envelopes, mailboxes, signals, and the wire shape.
pub mod message;

/// Policies and the security monitor.
pub mod security;

/// Core traits.
pub mod traits;

/// A prelude module for conveniently importing the most commonly used items.
///
/// Re-exports the core types and traits, the `sentinel-macro` attribute macros,
/// `async_trait`, and `tokio` (which `#[sentinel_main]` expands against).
pub mod prelude {
    pub use async_trait::async_trait;
    pub use sentinel_macro::{sentinel_actor, sentinel_main, sentinel_message};
    pub use tokio;

    pub use crate::actor::{ActorConfig, ActorContext, Idle, ManagedActor, Started};
    pub use crate::common::{
        ActorHandle, ActorRuntime, ComponentId, MailboxRegistry, RegistryError, SentinelApp,
        SentinelConfig,
    };
    pub use crate::message::{
        ControlSignal, DecodeError, Envelope, Mailbox, MailboxReceiver, MessageError,
        WireEnvelope,
    };
    pub use crate::security::{MonitorStats, Policy, PolicySet, SecurityMonitor};
    pub use crate::traits::{Actor, ActorHandleInterface, SentinelMessage};
}

pub use security::SecurityMonitor;
