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

use sentinel_reactive::prelude::*;
use sentinel_test::prelude::*;

use crate::setup::actors::Relay;
use crate::setup::{fast_config, initialize_tracing, next_envelope, settle, tap, TestOp};

mod setup;

fn relay_policies() -> PolicySet {
    [
        Policy::new("relay", "target", "ping"),
        Policy::new("relay", "target", "count"),
        Policy::new("relay", "ghost", "ping"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_authorize_is_exact_membership() {
    let monitor = SecurityMonitor::<TestOp>::new(relay_policies());

    assert!(monitor.authorize(&Envelope::from_component("relay", "target", TestOp::Ping)));
    assert!(!monitor.authorize(&Envelope::from_component("relay", "target", TestOp::Boom)));
    assert!(!monitor.authorize(&Envelope::from_component("target", "relay", TestOp::Ping)));
    assert!(!monitor.authorize(&Envelope::from_component("intruder", "target", TestOp::Ping)));
}

#[test]
fn test_missing_source_is_never_authorized() {
    let monitor = SecurityMonitor::<TestOp>::new(relay_policies());
    assert!(!monitor.authorize(&Envelope::external("target", TestOp::Ping)));
}

#[test]
fn test_empty_policy_set_denies_everything() {
    let monitor = SecurityMonitor::<TestOp>::new(PolicySet::new());
    assert!(!monitor.authorize(&Envelope::from_component("relay", "target", TestOp::Ping)));
}

/// An authorized event arrives unchanged, carrying the sender's identity as
/// stamped by its context.
#[sentinel_test]
async fn test_authorized_event_is_forwarded_with_source() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let monitor = SecurityMonitor::<TestOp>::new(relay_policies());
    let stats = monitor.stats();
    runtime.stage(runtime.new_actor("security", monitor)?);
    runtime.stage(runtime.new_actor("relay", Relay)?);
    let mut target = tap(&runtime, "target");
    runtime.start_all();

    runtime.inject(Envelope::external(
        "relay",
        TestOp::Forward {
            target: "target".into(),
        },
    ))?;

    let envelope = next_envelope(&mut target).await.expect("ping forwarded");
    assert_eq!(envelope.source().map(ComponentId::as_str), Some("relay"));
    assert_eq!(envelope.destination(), "target");
    assert_eq!(envelope.payload(), &TestOp::Ping);
    assert_eq!(stats.forwarded(), 1);

    runtime.shutdown_all().await?;
    Ok(())
}

#[sentinel_test]
async fn test_unauthorized_event_is_dropped() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let monitor = SecurityMonitor::<TestOp>::new(relay_policies());
    let stats = monitor.stats();
    runtime.stage(runtime.new_actor("security", monitor)?);
    runtime.stage(runtime.new_actor("relay", Relay)?);
    let mut other = tap(&runtime, "other");
    runtime.start_all();

    runtime.inject(Envelope::external(
        "relay",
        TestOp::Forward {
            target: "other".into(),
        },
    ))?;
    settle().await;

    assert!(other.try_recv().is_none());
    assert_eq!(stats.denied(), 1);
    assert_eq!(stats.forwarded(), 0);

    runtime.shutdown_all().await?;
    Ok(())
}

#[sentinel_test]
async fn test_sourceless_envelope_at_monitor_is_denied() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let monitor = SecurityMonitor::<TestOp>::new(relay_policies());
    let stats = monitor.stats();
    runtime.stage(runtime.new_actor("security", monitor)?);
    let mut target = tap(&runtime, "target");
    runtime.start_all();

    runtime
        .registry()
        .lookup("security")
        .expect("monitor registered")
        .post(Envelope::external("target", TestOp::Ping))?;
    settle().await;

    assert!(target.try_recv().is_none());
    assert_eq!(stats.snapshot().denied, 1);

    runtime.shutdown_all().await?;
    Ok(())
}

#[sentinel_test]
async fn test_authorized_event_without_destination_is_undeliverable() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let monitor = SecurityMonitor::<TestOp>::new(relay_policies());
    let stats = monitor.stats();
    runtime.stage(runtime.new_actor("security", monitor)?);
    runtime.stage(runtime.new_actor("relay", Relay)?);
    runtime.start_all();

    runtime.inject(Envelope::external(
        "relay",
        TestOp::Forward {
            target: "ghost".into(),
        },
    ))?;
    settle().await;

    assert_eq!(stats.undeliverable(), 1);
    assert_eq!(stats.denied(), 0);

    runtime.shutdown_all().await?;
    Ok(())
}

/// Events from one source to one destination keep their order through the monitor.
#[sentinel_test]
async fn test_forwarding_preserves_order() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    runtime.stage(runtime.new_actor("security", SecurityMonitor::new(relay_policies()))?);
    let mut target = tap(&runtime, "target");
    runtime.start_all();

    let monitor = runtime.registry().lookup("security").expect("monitor registered");
    for n in 0..50 {
        monitor.post(Envelope::from_component("relay", "target", TestOp::Count(n)))?;
    }

    let mut received = Vec::new();
    while received.len() < 50 {
        let envelope = next_envelope(&mut target).await.expect("all counts forwarded");
        received.push(envelope.into_payload());
    }
    let expected: Vec<TestOp> = (0..50).map(TestOp::Count).collect();
    assert_eq!(received, expected);

    runtime.shutdown_all().await?;
    Ok(())
}

/// A component that sends via its context cannot claim another identity.
#[sentinel_test]
async fn test_context_stamps_own_identity() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let mut security = tap(&runtime, "security");
    let ctx = ActorContext::new("camera", runtime.monitor_id(), runtime.registry().clone());

    ctx.send_via_monitor("satellite", TestOp::Ping)?;
    let envelope = next_envelope(&mut security).await.expect("routed to monitor");
    assert_eq!(envelope.source().map(ComponentId::as_str), Some("camera"));
    assert_eq!(envelope.destination(), "satellite");
    Ok(())
}

#[sentinel_test]
async fn test_send_via_monitor_without_monitor_fails() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let ctx = ActorContext::new("camera", runtime.monitor_id(), runtime.registry().clone());
    let err = ctx
        .send_via_monitor("satellite", TestOp::Ping)
        .expect_err("no monitor registered");
    assert!(matches!(err, MessageError::MonitorUnavailable(_)));
    Ok(())
}

/// Same-domain delivery skips the monitor but still carries the sender's name.
#[sentinel_test]
async fn test_send_direct_bypasses_monitor() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    runtime.stage(runtime.new_actor("relay", Relay)?);
    let mut target = tap(&runtime, "target");
    runtime.start_all();

    runtime.inject(Envelope::external(
        "relay",
        TestOp::Hand {
            target: "target".into(),
        },
    ))?;

    let envelope = next_envelope(&mut target).await.expect("ping delivered");
    assert_eq!(envelope.source().map(ComponentId::as_str), Some("relay"));
    assert_eq!(envelope.payload(), &TestOp::Ping);
    assert!(!runtime.registry().contains("security"));

    runtime.shutdown_all().await?;
    Ok(())
}

/// A policy naming the monitor as destination must not make it feed itself.
#[sentinel_test]
async fn test_event_addressed_to_monitor_is_dropped() -> anyhow::Result<()> {
    initialize_tracing();
    let runtime = SentinelApp::launch_with_config::<TestOp>(fast_config());
    let policies: PolicySet = [Policy::new("relay", "security", "ping")].into_iter().collect();
    let monitor = SecurityMonitor::<TestOp>::new(policies);
    let stats = monitor.stats();
    let handle = runtime.new_actor("security", monitor)?.start();

    handle.post(Envelope::from_component("relay", "security", TestOp::Ping))?;
    settle().await;

    assert_eq!(stats.denied(), 1);
    assert_eq!(stats.forwarded(), 0);
    tokio::time::timeout(Duration::from_secs(1), handle.stop()).await??;
    Ok(())
}
