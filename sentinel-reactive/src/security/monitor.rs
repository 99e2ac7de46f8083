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

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, error};

use crate::actor::ActorContext;
use crate::message::Envelope;
use crate::security::{Policy, PolicySet};
use crate::traits::{Actor, SentinelMessage};

/// Running totals kept by a [`SecurityMonitor`].
#[derive(Debug, Default)]
pub struct MonitorStats {
    forwarded: AtomicU64,
    denied: AtomicU64,
    undeliverable: AtomicU64,
}

/// A point-in-time copy of [`MonitorStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonitorSnapshot {
    /// Envelopes authorized and delivered.
    pub forwarded: u64,
    /// Envelopes rejected by policy.
    pub denied: u64,
    /// Envelopes authorized but with no live destination.
    pub undeliverable: u64,
}

impl MonitorStats {
    /// Envelopes authorized and delivered.
    pub fn forwarded(&self) -> u64 {
        self.forwarded.load(Ordering::Relaxed)
    }

    /// Envelopes rejected by policy.
    pub fn denied(&self) -> u64 {
        self.denied.load(Ordering::Relaxed)
    }

    /// Envelopes authorized but not deliverable.
    pub fn undeliverable(&self) -> u64 {
        self.undeliverable.load(Ordering::Relaxed)
    }

    /// Copies all counters.
    pub fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            forwarded: self.forwarded(),
            denied: self.denied(),
            undeliverable: self.undeliverable(),
        }
    }
}

/// The single trusted intermediary for cross-domain events.
///
/// Every envelope arriving in its mailbox is checked against the policy set.
/// Authorized envelopes are forwarded unchanged to their destination's mailbox;
/// everything else is logged and dropped. The sender is never told.
#[derive(Debug)]
pub struct SecurityMonitor<M> {
    policies: PolicySet,
    stats: Arc<MonitorStats>,
    _payload: PhantomData<fn() -> M>,
}

impl<M: SentinelMessage> SecurityMonitor<M> {
    /// Creates a monitor enforcing `policies`.
    pub fn new(policies: PolicySet) -> Self {
        Self {
            policies,
            stats: Arc::new(MonitorStats::default()),
            _payload: PhantomData,
        }
    }

    /// The policy set in force.
    pub fn policies(&self) -> &PolicySet {
        &self.policies
    }

    /// Shared counters, readable after the monitor has been moved into its actor.
    pub fn stats(&self) -> Arc<MonitorStats> {
        Arc::clone(&self.stats)
    }

    /// Decides whether `envelope` may be forwarded.
    ///
    /// An envelope without a source is never authorized.
    pub fn authorize(&self, envelope: &Envelope<M>) -> bool {
        let Some(source) = envelope.source() else {
            return false;
        };
        let candidate = Policy::new(
            source.clone(),
            envelope.destination().clone(),
            envelope.operation(),
        );
        self.policies.contains(&candidate)
    }
}

#[async_trait]
impl<M: SentinelMessage> Actor for SecurityMonitor<M> {
    type Message = M;

    async fn on_event(
        &mut self,
        ctx: &ActorContext<M>,
        envelope: Envelope<M>,
    ) -> anyhow::Result<()> {
        if envelope.destination() == ctx.id() {
            self.stats.denied.fetch_add(1, Ordering::Relaxed);
            error!(
                source = ?envelope.source(),
                operation = envelope.operation(),
                "event addressed to the monitor itself; dropped"
            );
            return Ok(());
        }
        if !self.authorize(&envelope) {
            self.stats.denied.fetch_add(1, Ordering::Relaxed);
            error!(
                source = ?envelope.source(),
                destination = %envelope.destination(),
                operation = envelope.operation(),
                "event denied by security policies"
            );
            return Ok(());
        }

        let destination = envelope.destination().clone();
        let operation = envelope.operation();
        let delivered = match ctx.registry().lookup(destination.as_str()) {
            Some(mailbox) => mailbox.post(envelope).is_ok(),
            None => false,
        };
        if delivered {
            self.stats.forwarded.fetch_add(1, Ordering::Relaxed);
            debug!(destination = %destination, operation, "event forwarded");
        } else {
            self.stats.undeliverable.fetch_add(1, Ordering::Relaxed);
            error!(
                destination = %destination,
                operation,
                "authorized event has no live destination"
            );
        }
        Ok(())
    }
}
